use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::icon::{Icon, IconView};
use crate::components::section_title::SectionTitle;
use crate::components::stat::Stat;
use crate::content::{
    anchor, CONTACT_DETAILS, CONTACT_SECTION, EXPERTISE, EXPERTISE_SECTION, FEATURES, HERO,
    PROJECTS, SOCIAL_LINKS, STATS, STATS_SECTION, TESTIMONIALS, TESTIMONIALS_SECTION, WHY_SECTION,
    WORK_SECTION,
};
use crate::reveal::component::Reveal;
use crate::reveal::presets;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="orb orb-indigo"></div>
                <div class="orb orb-fuchsia"></div>
            </div>
            <div class="hero-shade"></div>
            <div class="container hero-content">
                <Reveal config={presets::hero_line(0)}>
                    <h1>{ HERO.headline }</h1>
                </Reveal>
                <Reveal config={presets::hero_line(1)}>
                    <p class="hero-subline">{ HERO.subline }</p>
                </Reveal>
                <Reveal config={presets::hero_line(2)} class="hero-cta-group">
                    <a href={anchor::href(anchor::CONTACT)} class="primary-button">
                        { HERO.primary_cta }
                        <IconView icon={Icon::Rocket} />
                    </a>
                    <a href={anchor::href(anchor::WORK)} class="secondary-button">
                        { HERO.secondary_cta }
                        <IconView icon={Icon::ExternalLink} />
                    </a>
                </Reveal>
                <div class="scroll-hint">
                    <IconView icon={Icon::ChevronDown} class="bounce" />
                    { HERO.scroll_hint }
                </div>
            </div>
        </section>
    }
}

#[function_component(Statistics)]
fn statistics() -> Html {
    html! {
        <section id={anchor::STATISTICS} class="page-section statistics">
            <div class="statistics-glow"></div>
            <div class="container">
                <SectionTitle copy={&STATS_SECTION} />
                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <Stat value={stat.value} label={stat.label} reveal={presets::stat(i)} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyChooseUs)]
fn why_choose_us() -> Html {
    html! {
        <section id={anchor::WHY} class="page-section">
            <div class="container">
                <SectionTitle copy={&WHY_SECTION} />
                <div class="card-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal config={presets::card(i)} class="card feature-card">
                            <IconView icon={feature.icon} class="accent" />
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Expertise)]
fn expertise() -> Html {
    html! {
        <section id={anchor::EXPERTISE} class="page-section">
            <div class="container">
                <SectionTitle copy={&EXPERTISE_SECTION} />
                <div class="card-grid">
                    { for EXPERTISE.iter().enumerate().map(|(i, block)| html! {
                        <Reveal config={presets::card(i)} class="card">
                            <h3>{ block.title }</h3>
                            <ul class="check-list">
                                { for block.points.iter().map(|point| html! {
                                    <li>
                                        <IconView icon={Icon::CheckCircle} class="accent" />
                                        <span>{ *point }</span>
                                    </li>
                                }) }
                            </ul>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Work)]
fn work() -> Html {
    html! {
        <section id={anchor::WORK} class="page-section">
            <div class="container">
                <SectionTitle copy={&WORK_SECTION} />
                <div class="card-grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <a href="#" class="card project-card">
                            <div class="project-image">
                                <img src={project.image} alt={project.name} loading="lazy" />
                            </div>
                            <div class="project-meta">
                                <div>
                                    <div class="project-tag">{ project.tag }</div>
                                    <div class="project-name">{ project.name }</div>
                                </div>
                                <IconView icon={Icon::ExternalLink} class="muted" />
                            </div>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id={anchor::TESTIMONIALS} class="page-section">
            <div class="container">
                <SectionTitle copy={&TESTIMONIALS_SECTION} />
                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <Reveal config={presets::card(i)} class="card">
                            <p class="quote">{ format!("“{}”", testimonial.quote) }</p>
                            <div class="quote-author">
                                { format!("{} • {}", testimonial.name, testimonial.role) }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id={anchor::CONTACT} class="page-section">
            <div class="container narrow">
                <SectionTitle copy={&CONTACT_SECTION} />
                <div class="contact-grid">
                    <ContactForm />
                    <div class="contact-aside">
                        <div class="card">
                            { for CONTACT_DETAILS.iter().map(|detail| html! {
                                <div class="contact-detail">
                                    <IconView icon={detail.icon} class="accent" />
                                    { detail.text }
                                </div>
                            }) }
                        </div>
                        <div class="card">
                            <div class="muted-label">{"Follow us"}</div>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a href={link.href} aria-label={link.label} class="social-link">
                                        <IconView icon={link.icon} />
                                    </a>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Statistics />
            <WhyChooseUs />
            <Expertise />
            <Work />
            <Testimonials />
            <Contact />
            <style>
                {r#"
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    .container.narrow {
                        max-width: 56rem;
                    }

                    .hero {
                        position: relative;
                        padding: 8rem 0 6rem;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }

                    .orb {
                        position: absolute;
                        width: 42rem;
                        height: 42rem;
                        border-radius: 50%;
                        filter: blur(120px);
                        opacity: 0.55;
                        animation: drift 18s ease-in-out infinite alternate;
                    }

                    .orb-indigo {
                        background: #6366f1;
                        top: -12rem;
                        right: -8rem;
                    }

                    .orb-fuchsia {
                        background: #d946ef;
                        bottom: -16rem;
                        left: 20%;
                        animation-delay: -9s;
                    }

                    @keyframes drift {
                        from { transform: translate(0, 0) scale(1); }
                        to { transform: translate(-6rem, 4rem) scale(1.15); }
                    }

                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.7), #000);
                    }

                    .hero-content {
                        position: relative;
                        max-width: 80rem;
                    }

                    .hero-content > div {
                        max-width: 48rem;
                    }

                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 800;
                        line-height: 1.15;
                        margin: 0;
                    }

                    .hero-subline {
                        margin-top: 1.5rem;
                        font-size: 1.25rem;
                        color: #d4d4d8;
                    }

                    .hero-cta-group {
                        margin-top: 2.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .primary-button,
                    .secondary-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.25rem;
                        border-radius: 0.375rem;
                        font-weight: 500;
                        text-decoration: none;
                        border: none;
                        cursor: pointer;
                        font-size: 1rem;
                        transition: background 0.2s ease;
                    }

                    .primary-button {
                        background: #fff;
                        color: #000;
                    }

                    .primary-button:hover {
                        background: #e4e4e7;
                    }

                    .secondary-button {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .secondary-button:hover {
                        background: rgba(255, 255, 255, 0.15);
                    }

                    .scroll-hint {
                        margin-top: 4rem;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #a1a1aa;
                    }

                    .bounce {
                        animation: bounce 1s infinite;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                    }

                    .page-section {
                        position: relative;
                        padding: 6rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }

                    .statistics-glow {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, transparent, rgba(217, 70, 239, 0.05), transparent);
                        pointer-events: none;
                    }

                    .section-title {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .section-kicker {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: rgba(232, 121, 249, 0.8);
                        margin-bottom: 0.5rem;
                    }

                    .section-title h2 {
                        font-size: clamp(1.5rem, 4vw, 2.25rem);
                        font-weight: 700;
                        margin: 0;
                    }

                    .section-subtitle {
                        margin-top: 0.75rem;
                        color: #a1a1aa;
                    }

                    .stats-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }

                    .stat {
                        text-align: center;
                    }

                    .stat-value {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 800;
                        background: linear-gradient(to bottom right, #fff, #a1a1aa);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .stat-label {
                        margin-top: 0.5rem;
                        color: #a1a1aa;
                    }

                    .card-grid {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .card {
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.02);
                        padding: 1.5rem;
                    }

                    .feature-card {
                        background: linear-gradient(to bottom, rgba(255, 255, 255, 0.03), transparent);
                    }

                    .card h3 {
                        margin: 1rem 0 0;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }

                    .card p {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }

                    .icon {
                        width: 1rem;
                        height: 1rem;
                        flex-shrink: 0;
                    }

                    .icon.accent {
                        width: 1.5rem;
                        height: 1.5rem;
                        color: #e879f9;
                    }

                    .icon.muted {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #a1a1aa;
                        transition: color 0.2s ease;
                    }

                    .check-list {
                        list-style: none;
                        padding: 0;
                        margin: 1rem 0 0;
                        color: #a1a1aa;
                    }

                    .check-list li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                        margin-top: 0.5rem;
                    }

                    .check-list .icon.accent {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .project-card {
                        padding: 0;
                        overflow: hidden;
                        color: inherit;
                        text-decoration: none;
                        transition: transform 0.3s ease;
                    }

                    .project-card:hover {
                        transform: translateY(-6px);
                    }

                    .project-card:hover .icon.muted {
                        color: #fff;
                    }

                    .project-image {
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                    }

                    .project-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }

                    .project-card:hover .project-image img {
                        transform: scale(1.05);
                    }

                    .project-meta {
                        padding: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .project-tag {
                        font-size: 0.875rem;
                        color: rgba(232, 121, 249, 0.9);
                    }

                    .project-name {
                        font-weight: 600;
                    }

                    .card p.quote {
                        margin: 0;
                        font-size: 1rem;
                        color: #d4d4d8;
                    }

                    .quote-author {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }

                    .contact-grid {
                        margin-top: 2.5rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }

                    .contact-form .form-field {
                        margin-bottom: 1rem;
                    }

                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        color: #d4d4d8;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        margin-top: 0.25rem;
                        width: 100%;
                        box-sizing: border-box;
                        border-radius: 0.375rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 0.5rem 0.75rem;
                        color: #fff;
                        font: inherit;
                        outline: none;
                    }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        box-shadow: 0 0 0 2px #d946ef;
                    }

                    .contact-aside {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .contact-detail {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: #d4d4d8;
                    }

                    .contact-detail + .contact-detail {
                        margin-top: 0.75rem;
                    }

                    .contact-detail .icon.accent {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    .muted-label {
                        font-size: 0.875rem;
                        color: #a1a1aa;
                    }

                    .social-links {
                        margin-top: 0.75rem;
                        display: flex;
                        gap: 1rem;
                    }

                    .social-link {
                        display: inline-flex;
                        padding: 0.5rem;
                        border-radius: 0.375rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        transition: background 0.2s ease;
                    }

                    .social-link:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .social-link .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    @media (max-width: 768px) {
                        .hero {
                            padding: 7rem 0 6rem;
                        }

                        .scroll-hint {
                            display: none;
                        }

                        .page-section {
                            padding: 4rem 0;
                        }

                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .card-grid,
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
