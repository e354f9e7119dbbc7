use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::phone_mockup::PhoneMockup;
use crate::components::safe_image::SafeImage;
use crate::config::SiteConfig;
use crate::pages::privacy::PrivacyPolicy;

pub const FEATURES_ID: &str = "features";
pub const ABOUT_ID: &str = "about";
pub const CONTACT_ID: &str = "contact";

const SECTION_IDS: &[&str] = &[FEATURES_ID, ABOUT_ID, CONTACT_ID];

const HEADER_LINKS: &[(&str, &str)] = &[
    ("How it Works", FEATURES_ID),
    ("Our Goal", ABOUT_ID),
    ("Support", CONTACT_ID),
];

const FOOTER_LINKS: &[(&str, &str)] = &[("Our Goal", ABOUT_ID), ("Support", CONTACT_ID)];

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "No Guesswork",
        body: "Camentra includes 25+ overlay templates and an AI coach that guides your phone to the perfect angle in real-time.",
    },
    Feature {
        title: "Brand Consistency",
        body: "Maintain the same style across every photo so your listings and social posts look professional and intentional.",
    },
    Feature {
        title: "Done in One Shot",
        body: "Stop scrolling through dozens of bad takes. Get the 'hero shot' the first time and get back to your business.",
    },
];

const APPLE_LOGO_PATH: &str = "M18.71 19.5c-.83 1.24-1.71 2.45-3.1 2.48-1.34.03-1.77-.79-3.29-.79-1.53 0-2 .77-3.27.82-1.31.05-2.3-1.32-3.14-2.53C4.25 17 2.94 12.45 4.7 9.39c.87-1.52 2.43-2.48 4.12-2.51 1.28-.02 2.5.87 3.29.87.78 0 2.26-1.07 3.81-.91.65.03 2.47.26 3.64 1.98-.09.06-2.17 1.28-2.15 3.81.03 3.02 2.65 4.03 2.68 4.04-.03.07-.42 1.44-1.38 2.83M13 3.5c.73-.83 1.94-1.46 2.94-1.5.13 1.17-.36 2.35-1.04 3.19-.69.85-1.83 1.51-2.95 1.42-.15-1.15.41-2.35 1.05-3.11z";

fn anchor(id: &str) -> String {
    format!("#{}", id)
}

fn nav_links(links: &[(&'static str, &'static str)]) -> Html {
    links
        .iter()
        .map(|(label, id)| html! { <a href={anchor(id)} class="nav-link">{*label}</a> })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: Rc<SiteConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let site = &props.site;
    let privacy_open = use_state(|| false);

    let open_privacy = {
        let privacy_open = privacy_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening privacy policy");
            privacy_open.set(true);
        })
    };

    let close_privacy = {
        let privacy_open = privacy_open.clone();
        Callback::from(move |_: ()| privacy_open.set(false))
    };

    html! {
        <div class="landing-page">
            <Modal visible={*privacy_open} on_close={close_privacy} title="Privacy Policy">
                <PrivacyPolicy
                    product_name={site.product_name.clone()}
                    company_name={site.company_name.clone()}
                    support_email={site.support_email.clone()}
                />
            </Modal>

            <header class="site-header">
                <div class="site-header-inner">
                    <div class="brand">
                        <SafeImage
                            src={site.assets.logo.clone()}
                            alt={format!("{} Logo", site.product_name)}
                            class={classes!("brand-logo")}
                        />
                        <span class="brand-name">{site.product_name.clone()}</span>
                    </div>
                    <nav class="site-nav">
                        { nav_links(HEADER_LINKS) }
                    </nav>
                </div>
            </header>

            <main>
                // Hero Section
                <section class="hero">
                    <div class="hero-inner">
                        <div class="hero-copy">
                            <div class="hero-icon">
                                <SafeImage src={site.assets.app_icon.clone()} alt="Icon" class={classes!("app-icon")} />
                            </div>
                            <h1>{"Pro Quality Photos, Simplified."}</h1>
                            <p class="hero-subtitle">
                                {format!("You don't need a studio or professional camera to take great photos. {} is an AI-powered coach that helps you take clear, consistent, and beautiful pictures right from your phone.", site.product_name)}
                            </p>
                            <div class="store-badge">
                                <svg viewBox="0 0 24 24" fill="currentColor">
                                    <path d={APPLE_LOGO_PATH} />
                                </svg>
                                {"Download on the App Store"}
                            </div>
                        </div>
                        <div class="hero-device">
                            <PhoneMockup
                                video={site.assets.hero_video.clone()}
                                poster={site.assets.hero_poster.clone()}
                            />
                        </div>
                    </div>
                </section>

                // Features Section
                <section id={FEATURES_ID} class="features">
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <h3>{feature.title}</h3>
                                <p>{feature.body}</p>
                            </div>
                        }) }
                    </div>
                </section>

                // About Section
                <section id={ABOUT_ID} class="about">
                    <div class="narrow">
                        <h2>{"Built for you."}</h2>
                        <div class="about-copy">
                            <p>
                                {format!("{} is for the solo entrepreneur, small business owner or builder who wears every hat: The baker, the maker, and the shop owner. We know you don't have time to learn complex photography, but we also know that great photos define your brand.", site.product_name)}
                            </p>
                            <p>
                                {"Our goal is to give you the confidence to capture your work beautifully, without the stress. We believe every business deserves to look its best."}
                            </p>
                        </div>
                    </div>
                </section>

                // Support Section
                <section id={CONTACT_ID} class="support">
                    <div class="narrow">
                        <h2>{"Support"}</h2>
                        <p>{"Have questions or need assistance?"}</p>
                        <a href={site.mailto()} class="support-link">{site.support_email.clone()}</a>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="site-footer-inner">
                    <div class="footer-brand">
                        <div class="footer-mark">
                            <SafeImage src={site.assets.footer_logo.clone()} alt="" class={classes!("footer-logo")} />
                            <span>{site.product_name.clone()}</span>
                        </div>
                        <p class="footer-company">{site.company_name.clone()}</p>
                        <p class="footer-copyright">{format!("© {}. All rights reserved.", site.copyright_year)}</p>
                    </div>
                    <div class="footer-links">
                        { nav_links(FOOTER_LINKS) }
                        <button class="nav-link footer-privacy" onclick={open_privacy}>
                            {"Privacy Policy"}
                        </button>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    background: #fff;
                    color: #1d1d1f;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .landing-page ::selection {
                    background: #eff6ff;
                    color: #1d4ed8;
                }

                .landing-page main {
                    flex-grow: 1;
                }

                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid #f3f4f6;
                }

                .site-header-inner, .hero-inner, .features-grid, .site-footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .site-header-inner {
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.625rem;
                }

                .brand-logo {
                    width: 2rem;
                    height: 2rem;
                    object-fit: contain;
                }

                .brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }

                .site-nav {
                    display: none;
                    gap: 2rem;
                }

                .nav-link {
                    font-size: 13px;
                    font-weight: 500;
                    color: #86868b;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #1d1d1f;
                }

                .hero {
                    padding: 4rem 1.5rem;
                    overflow: hidden;
                }

                .hero-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 4rem;
                }

                .hero-copy {
                    flex: 1;
                    order: 2;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    animation: fadeIn 0.8s ease-out;
                }

                .hero-device {
                    flex: 1;
                    order: 1;
                }

                .hero-icon {
                    display: none;
                    margin-bottom: 2rem;
                }

                .app-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 22.5%;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                }

                .hero h1 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    line-height: 1.1;
                    margin: 0 0 1.5rem 0;
                }

                .hero-subtitle {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #86868b;
                    line-height: 1.625;
                    max-width: 36rem;
                    margin: 0 0 2.5rem 0;
                }

                .store-badge {
                    display: inline-flex;
                    align-items: center;
                    padding: 1.25rem 2.5rem;
                    background: #000;
                    color: #fff;
                    border-radius: 1rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: default;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    transition: all 0.2s ease;
                }

                .store-badge:hover {
                    background: #1d1d1f;
                }

                .store-badge:active {
                    transform: scale(0.95);
                }

                .store-badge svg {
                    width: 1.5rem;
                    height: 1.5rem;
                    margin-right: 0.75rem;
                }

                .features {
                    padding: 6rem 0;
                    background: #f5f5f7;
                }

                .features-grid {
                    display: grid;
                    gap: 2rem;
                }

                .feature-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    padding: 3rem;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 2.5rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .feature-card h3 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .feature-card p {
                    margin: 0;
                    color: #86868b;
                    line-height: 1.625;
                }

                .about, .support {
                    padding: 6rem 0;
                }

                .narrow {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .about h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin: 0 0 2.5rem 0;
                }

                .about-copy p {
                    font-size: 1.125rem;
                    color: #424245;
                    line-height: 1.625;
                    margin: 0 0 2rem 0;
                }

                .support {
                    border-top: 1px solid #f9fafb;
                }

                .support h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    margin: 0 0 0.5rem 0;
                }

                .support p {
                    color: #86868b;
                    margin: 0 0 1rem 0;
                }

                .support-link {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #0066cc;
                    text-decoration: none;
                }

                .support-link:hover {
                    text-decoration: underline;
                }

                .site-footer {
                    padding: 5rem 0 3rem 0;
                    border-top: 1px solid #f3f4f6;
                }

                .site-footer-inner {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2.5rem;
                }

                .footer-mark {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    opacity: 0.4;
                    filter: grayscale(1);
                    font-size: 0.75rem;
                    font-weight: 700;
                }

                .footer-logo {
                    width: 1rem;
                    height: 1rem;
                }

                .footer-company {
                    font-size: 0.875rem;
                    font-weight: 500;
                    line-height: 1;
                    margin: 0 0 0.25rem 0;
                }

                .footer-copyright {
                    font-size: 0.75rem;
                    color: #86868b;
                    margin: 0;
                }

                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem 3rem;
                }

                .footer-privacy {
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                    text-align: left;
                }

                @media (min-width: 768px) {
                    .site-nav {
                        display: flex;
                    }

                    .hero {
                        padding: 8rem 1.5rem;
                    }

                    .hero-inner {
                        flex-direction: row;
                        gap: 6rem;
                    }

                    .hero-copy {
                        order: 1;
                        align-items: flex-start;
                        text-align: left;
                    }

                    .hero-device {
                        order: 2;
                    }

                    .hero-icon {
                        display: block;
                    }

                    .hero h1 {
                        font-size: 3.75rem;
                    }

                    .hero-subtitle, .about-copy p {
                        font-size: 1.25rem;
                    }

                    .about h2 {
                        font-size: 2.25rem;
                    }

                    .features-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .site-footer-inner {
                        flex-direction: row;
                        align-items: center;
                    }
                }

                @media (min-width: 1024px) {
                    .hero h1 {
                        font-size: 4.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_link_targets_a_section_on_the_page() {
        for (label, id) in HEADER_LINKS.iter().chain(FOOTER_LINKS) {
            assert!(SECTION_IDS.contains(id), "{} points at missing #{}", label, id);
        }
    }

    #[test]
    fn header_links_every_section_once() {
        let mut ids: Vec<&str> = HEADER_LINKS.iter().map(|(_, id)| *id).collect();
        ids.sort_unstable();
        let mut sections = SECTION_IDS.to_vec();
        sections.sort_unstable();
        assert_eq!(ids, sections);
    }

    #[test]
    fn anchors_are_fragment_links() {
        assert_eq!(anchor(CONTACT_ID), "#contact");
    }

    #[test]
    fn three_feature_cards() {
        let titles: Vec<&str> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, ["No Guesswork", "Brand Consistency", "Done in One Shot"]);
    }
}
