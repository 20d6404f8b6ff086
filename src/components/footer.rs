use chrono::Datelike;
use yew::prelude::*;

use crate::content::{anchor, BRAND, FOOTER_LINKS};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <div class="brand-mark small"></div>
                    <span>{ copyright_line(year) }</span>
                </div>
                <div class="footer-links">
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <a href={anchor::href(link.anchor)}>{ link.label }</a>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        color: #a1a1aa;
                    }

                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 2rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }

                    .footer-brand,
                    .footer-links {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .footer-brand {
                        gap: 0.5rem;
                    }

                    .footer-links a {
                        color: inherit;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .footer-links a:hover {
                        color: #fff;
                    }

                    @media (max-width: 768px) {
                        .footer-content {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(copyright_line(2026), "© 2026 NovaIT. All rights reserved.");
    }
}
