use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::{anchor, BRAND, NAV_LINKS};

#[function_component(Nav)]
pub fn nav() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={anchor::href(anchor::HOME)} class="nav-logo">
                    <div class="brand-mark pulsing"></div>
                    <span>{ BRAND }</span>
                </a>
                <nav class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={anchor::href(link.anchor)} class="nav-link">{ link.label }</a>
                    }) }
                    <a href={anchor::href(anchor::CONTACT)} class="nav-cta">
                        {"Start a Project"}
                        <IconView icon={Icon::ArrowRight} />
                    </a>
                </nav>
                <a href={anchor::href(anchor::CONTACT)} class="nav-cta compact">
                    {"Contact"}
                    <IconView icon={Icon::ArrowRight} />
                </a>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(8px);
                        transition: background 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        text-decoration: none;
                        font-weight: 600;
                        letter-spacing: 0.025em;
                    }

                    .brand-mark {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(to bottom right, #6366f1, #d946ef);
                    }

                    .brand-mark.small {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 0.375rem;
                    }

                    .brand-mark.pulsing {
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }

                    .nav-link {
                        color: #d4d4d8;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #fff;
                    }

                    .nav-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        background: #fff;
                        color: #18181b;
                        text-decoration: none;
                        font-size: 0.875rem;
                        transition: background 0.2s ease;
                    }

                    .nav-cta:hover {
                        background: #e4e4e7;
                    }

                    .nav-cta.compact {
                        display: none;
                        padding: 0.375rem 0.75rem;
                        font-size: 0.75rem;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .nav-cta.compact {
                            display: inline-flex;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
