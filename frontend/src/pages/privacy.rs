use chrono::{Datelike, NaiveDate};
use yew::prelude::*;

const THIRD_PARTIES: &[&str] = &[
    "Supabase (authentication and avatar storage)",
    "RevenueCat (subscription management)",
    "Apple App Store (subscription processing)",
    "Sentry (crash reporting)",
];

/// "October 16, 2026"
pub fn last_updated(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

#[derive(Properties, PartialEq)]
pub struct PrivacyPolicyProps {
    pub product_name: AttrValue,
    pub company_name: AttrValue,
    pub support_email: AttrValue,
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy(props: &PrivacyPolicyProps) -> Html {
    let today = chrono::Local::now().date_naive();
    let PrivacyPolicyProps { product_name, company_name, support_email } = props;

    html! {
        <div class="privacy-policy">
            <section>
                <p class="privacy-updated">{format!("Last Updated: {}", last_updated(today))}</p>
                <p>
                    {"This Privacy Policy describes how "}<strong>{company_name.to_string()}</strong>
                    {format!(" (\"we,\" \"our,\" or \"us\"), which operates the {} mobile application (the \"App\"), collects, uses, and protects your information when you use the App.", &**product_name)}
                </p>
            </section>

            <section>
                <h3>{"1. Information We Collect"}</h3>
                <p>{"We collect the following types of information:"}</p>
                <ul class="privacy-details">
                    <li><strong>{"Account Information:"}</strong>{" If you create an account, we collect your email address and any profile information you provide."}</li>
                    <li><strong>{"Usage and Diagnostic Data:"}</strong>{" We collect limited diagnostic data (such as crash logs and performance information) to improve app stability."}</li>
                    <li><strong>{"Device Information:"}</strong>{" We may collect device identifiers, operating system version, and device type to improve app functionality."}</li>
                    <li><strong>{"Content You Submit (e.g., photos):"}</strong>{" Content you choose to submit for in-app features is processed to provide results. We do not retain original photos on our servers, but we may retain derived data, metadata, or insights generated from that content to improve features and product quality."}</li>
                    <li><strong>{"Avatar Images:"}</strong>{" If you upload a profile avatar, that image is stored in cloud storage associated with your account."}</li>
                </ul>
            </section>

            <section>
                <h3>{"2. How We Use Your Information"}</h3>
                <p>{"We use the information we collect to:"}</p>
                <ul>
                    <li>{"Provide, maintain, and improve the App"}</li>
                    <li>{"Process transactions and manage subscriptions"}</li>
                    <li>{"Send you technical notices and support messages"}</li>
                    <li>{"Respond to your comments and questions"}</li>
                    <li>{"Detect and prevent fraud or abuse"}</li>
                    <li>{"Diagnose crashes and performance issues"}</li>
                    <li>{"Analyze content-related trends to improve guidance and product quality"}</li>
                </ul>
            </section>

            <section>
                <h3>{"3. Data Storage, Retention, and Security"}</h3>
                <p>{"Your data is primarily stored locally on your device. If you create an account, your account profile data and avatar (if uploaded) are stored on secure cloud servers."}</p>
                <p><strong>{"Data Retention:"}</strong>{" We retain your personal information for as long as your account is active or as needed to provide you services. If you delete your account, we will delete or anonymize your personal information within a reasonable timeframe."}</p>
                <p><strong>{"Derived Data and Insights:"}</strong>{" We may retain derived data or insights generated from content to improve features. You may request deletion by contacting us."}</p>
                <p><strong>{"Data Backup:"}</strong>{" You are responsible for backing up your photos and content. We are not liable for any loss of data."}</p>
                <p><strong>{"Sensitive Personal Information:"}</strong>{" We do not collect sensitive personal information (such as biometric data, health information, or precise geolocation)."}</p>
            </section>

            <section>
                <h3>{"4. Third-Party Services"}</h3>
                <p>{"The App uses third-party services for authentication, subscriptions, cloud storage, and crash reporting. We use:"}</p>
                <ul>
                    { for THIRD_PARTIES.iter().map(|service| html! { <li>{*service}</li> }) }
                </ul>
            </section>

            <section>
                <h3>{"5. Your Rights and Choices"}</h3>
                <p>{"You have the right to:"}</p>
                <ul>
                    <li>{"Access, update, or delete your account information"}</li>
                    <li>{"Request a copy of your personal data"}</li>
                    <li>{"Opt out of certain data collection through settings"}</li>
                    <li>{"Request removal of your User Content from our systems"}</li>
                </ul>
                <p>
                    {"To exercise these rights, contact us at "}
                    <span class="privacy-email">{support_email.to_string()}</span>
                    {". We typically respond within 30 days."}
                </p>
            </section>

            <section>
                <h3>{"6. Children's Privacy"}</h3>
                <p>{"The App is not intended for children under 13. We do not knowingly collect information from children under 13. If you believe we have, please contact us immediately."}</p>
            </section>

            <section>
                <h3>{"7. Contact Us"}</h3>
                <p>
                    {"If you have questions about this Privacy Policy, please contact us at:"}
                    <br/>
                    <strong>{support_email.to_string()}</strong>
                </p>
            </section>

            <style>
                {r#"
                .privacy-policy section + section {
                    margin-top: 2.5rem;
                }

                .privacy-policy h3 {
                    margin: 0 0 1rem 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #1d1d1f;
                }

                .privacy-policy p {
                    margin: 0 0 1rem 0;
                }

                .privacy-policy strong {
                    color: #1d1d1f;
                }

                .privacy-updated {
                    font-size: 0.875rem;
                    color: #86868b;
                }

                .privacy-policy ul {
                    list-style: disc;
                    padding-left: 1.25rem;
                    margin: 0 0 1rem 0;
                }

                .privacy-policy ul li + li {
                    margin-top: 0.5rem;
                }

                .privacy-policy ul.privacy-details {
                    list-style: none;
                    padding-left: 0;
                }

                .privacy-policy ul.privacy-details li + li {
                    margin-top: 1rem;
                }

                .privacy-email {
                    color: #2563eb;
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
    fn last_updated_uses_long_us_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(last_updated(date), "October 16, 2026");
    }

    #[test]
    fn last_updated_does_not_pad_the_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(last_updated(date), "March 1, 2026");
    }
}
