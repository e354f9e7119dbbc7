use yew::prelude::*;

use crate::scroll_lock::{self, BodyStyle};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub visible: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop. Page scrolling stays locked for as
/// long as it is visible.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_effect_with_deps(
        |visible: &bool| {
            let lock = scroll_lock::lock_while(*visible, BodyStyle::current);
            // Runs on the next visibility change and on unmount.
            move || drop(lock)
        },
        props.visible,
    );

    if !props.visible {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-root">
            <div class="modal-backdrop" onclick={close.clone()}></div>
            <div class="modal-panel" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <div class="modal-header">
                    <h2 id="modal-title">{props.title.to_string()}</h2>
                    <button class="modal-close" onclick={close} aria-label="Close">
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .modal-root {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                }

                .modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(4px);
                    transition: opacity 0.3s ease;
                }

                .modal-panel {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    max-width: 42rem;
                    max-height: 85vh;
                    overflow: hidden;
                    background: #fff;
                    border-radius: 2.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    animation: modalIn 0.3s ease-out;
                }

                @keyframes modalIn {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }

                .modal-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-shrink: 0;
                    padding: 2rem;
                    border-bottom: 1px solid #f9fafb;
                }

                .modal-header h2 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }

                .modal-close {
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }

                .modal-close:hover {
                    background: #f3f4f6;
                }

                .modal-close svg {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .modal-body {
                    padding: 2rem;
                    overflow-y: auto;
                    color: #424245;
                    line-height: 1.625;
                }

                @media (min-width: 768px) {
                    .modal-header, .modal-body {
                        padding: 2.5rem;
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
    use tokio::task::LocalSet;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HostProps {
        visible: bool,
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        html! {
            <Modal visible={props.visible} on_close={Callback::from(|_: ()| ())} title="Privacy Policy">
                <p>{"Policy body"}</p>
            </Modal>
        }
    }

    async fn render(visible: bool) -> String {
        LocalSet::new()
            .run_until(LocalServerRenderer::<Host>::with_props(HostProps { visible }).render())
            .await
    }

    #[tokio::test]
    async fn hidden_modal_renders_no_overlay() {
        let html = render(false).await;
        assert!(!html.contains("modal-root"), "{}", html);
        assert!(!html.contains("modal-backdrop"), "{}", html);
        assert!(!html.contains("Policy body"), "{}", html);
    }

    #[tokio::test]
    async fn visible_modal_renders_backdrop_close_control_and_content() {
        let html = render(true).await;
        assert!(html.contains("modal-backdrop"), "{}", html);
        assert!(html.contains("modal-close"), "{}", html);
        assert!(html.contains("Privacy Policy"), "{}", html);
        assert!(html.contains("Policy body"), "{}", html);
    }
}
