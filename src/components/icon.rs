use yew::prelude::*;

/// Line icons drawn on a 24x24 grid with a 2px round stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    ChevronDown,
    CheckCircle,
    Code,
    Sparkles,
    Rocket,
    Shield,
    Cpu,
    Clock,
    Users,
    Linkedin,
    Github,
    Twitter,
    Mail,
    Phone,
    MapPin,
    ExternalLink,
}

enum Shape {
    Path(&'static str),
    Circle(&'static str, &'static str, &'static str),
    Rect(&'static str, &'static str, &'static str, &'static str, &'static str),
}

use Shape::{Circle, Path, Rect};

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::CheckCircle => &[Circle("12", "12", "10"), Path("m9 12 2 2 4-4")],
            Icon::Code => &[Path("m18 16 4-4-4-4"), Path("m6 8-4 4 4 4"), Path("m14.5 4-5 16")],
            Icon::Sparkles => &[
                Path("M12 3l1.9 5.8L20 10.7l-6.1 1.9L12 18.5l-1.9-5.9L4 10.7l6.1-1.9z"),
                Path("M5 3v4"),
                Path("M3 5h4"),
                Path("M19 17v4"),
                Path("M17 19h4"),
            ],
            Icon::Rocket => &[
                Path("M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"),
                Path("m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"),
                Path("M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"),
                Path("M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"),
            ],
            Icon::Shield => &[Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")],
            Icon::Cpu => &[
                Rect("4", "4", "16", "16", "2"),
                Rect("9", "9", "6", "6", "0"),
                Path("M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"),
            ],
            Icon::Clock => &[Circle("12", "12", "10"), Path("M12 6v6l4 2")],
            Icon::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle("9", "7", "4"),
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect("2", "9", "4", "12", "0"),
                Circle("4", "4", "2"),
            ],
            Icon::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            Icon::Twitter => &[Path("M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z")],
            Icon::Mail => &[
                Rect("2", "4", "20", "16", "2"),
                Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
            ],
            Icon::Phone => &[Path("M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z")],
            Icon::MapPin => &[
                Path("M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"),
                Circle("12", "10", "3"),
            ],
            Icon::ExternalLink => &[
                Path("M15 3h6v6"),
                Path("M10 14 21 3"),
                Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(|shape| match shape {
                Path(d) => html! { <path d={*d} /> },
                Circle(cx, cy, r) => html! { <circle cx={*cx} cy={*cy} r={*r} /> },
                Rect(x, y, width, height, rx) => html! {
                    <rect x={*x} y={*y} width={*width} height={*height} rx={*rx} />
                },
            }) }
        </svg>
    }
}
