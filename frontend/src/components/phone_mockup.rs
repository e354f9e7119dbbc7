use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PhoneMockupProps {
    pub video: AttrValue,
    pub poster: AttrValue,
}

/// iPhone frame playing the app's welcome screen on a silent loop.
#[function_component(PhoneMockup)]
pub fn phone_mockup(props: &PhoneMockupProps) -> Html {
    html! {
        <div class="phone-frame">
            // Action, volume, power
            <div class="phone-button phone-button-action"></div>
            <div class="phone-button phone-button-volume"></div>
            <div class="phone-button phone-button-power"></div>

            <div class="phone-screen">
                <div class="dynamic-island">
                    <div class="dynamic-island-lens"></div>
                </div>
                <div class="phone-video">
                    <video
                        src={props.video.clone()}
                        poster={props.poster.clone()}
                        autoplay=true
                        loop=true
                        muted=true
                        playsinline=true
                    />
                    <div class="phone-glare"></div>
                </div>
            </div>
            <style>
                {r#"
                .phone-frame {
                    position: relative;
                    margin: 0 auto;
                    width: 280px;
                    height: 580px;
                    padding: 10px;
                    background: #1d1d1f;
                    border-radius: 50px;
                    box-shadow: 0 40px 100px -20px rgba(0, 0, 0, 0.4), 0 0 0 1px rgba(255, 255, 255, 0.1);
                    animation: fadeIn 0.8s ease-out;
                    box-sizing: border-box;
                }

                @media (min-width: 768px) {
                    .phone-frame {
                        width: 310px;
                        height: 630px;
                    }
                }

                .phone-button {
                    position: absolute;
                    width: 3px;
                    background: #3a3a3c;
                }

                .phone-button-action {
                    left: -2px;
                    top: 7rem;
                    height: 3rem;
                    border-radius: 6px 0 0 6px;
                }

                .phone-button-volume {
                    left: -2px;
                    top: 11rem;
                    height: 6rem;
                    border-radius: 6px 0 0 6px;
                }

                .phone-button-power {
                    right: -2px;
                    top: 10rem;
                    height: 5rem;
                    border-radius: 0 6px 6px 0;
                }

                .phone-screen {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #000;
                    border-radius: 40px;
                    box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
                }

                .dynamic-island {
                    position: absolute;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 20;
                    width: 6rem;
                    height: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: flex-end;
                    padding: 0 0.75rem;
                    box-sizing: border-box;
                    background: #000;
                    border-radius: 9999px;
                }

                .dynamic-island-lens {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.1);
                }

                .phone-video {
                    position: relative;
                    width: 100%;
                    height: 100%;
                }

                .phone-video video {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }

                .phone-glare {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to top right, rgba(255, 255, 255, 0.05), transparent, rgba(255, 255, 255, 0.1));
                }
                "#}
            </style>
        </div>
    }
}
