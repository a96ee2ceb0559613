//! Public marketing page listing product features.
//!
//! Renders the hero once, one section per catalog entry, and a closing
//! call-to-action. Output depends only on the static catalog.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icon::Icon;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content::features::{FEATURES, FeatureSection, SectionStyle, benefit_rows};

/// Route the call-to-action sends visitors to.
pub const CTA_ROUTE: &str = "/dashboard";

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="features-page">
            <SiteHeader/>
            <Hero/>
            <div class="features-page__sections">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| view! { <FeatureBlock feature=*feature index=index/> })
                    .collect_view()}
            </div>
            <CallToAction/>
            <SiteFooter/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="features-hero">
            <DotGrid/>
            <div class="features-hero__copy">
                <h1 class="features-hero__title">
                    "Powerful " <span class="features-hero__accent">"Features"</span> " for Teams"
                </h1>
                <p class="features-hero__subtitle">
                    "Everything you need to bring your ideas to life and collaborate effectively with your team."
                </p>
            </div>
            <div class="features-hero__images">
                <img src="/features.png" alt="Features" width="600" height="420"/>
                <img src="/features2.png" alt="Features" width="600" height="420"/>
            </div>
        </section>
    }
}

/// Dotted backdrop with a fade toward the bottom edge.
#[component]
fn DotGrid() -> impl IntoView {
    view! {
        <div class="dot-grid" aria-hidden="true">
            <div class="dot-grid__fade"></div>
            <svg width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
                <pattern id="dot-pattern" x="0" y="0" width="40" height="40" patternUnits="userSpaceOnUse">
                    <circle cx="20" cy="20" r="1" fill="#3e3e3e" opacity="0.5"></circle>
                </pattern>
                <rect width="100%" height="100%" fill="url(#dot-pattern)"></rect>
            </svg>
        </div>
    }
}

#[component]
fn FeatureBlock(feature: FeatureSection, index: usize) -> impl IntoView {
    let style = SectionStyle::for_position(index, feature.reverse);

    view! {
        <section class=style.section_class() data-feature=feature.title>
            <div class=style.row_class()>
                <div class="feature-section__text">
                    <div class="feature-section__heading">
                        <div class="feature-section__icon">
                            <Icon icon=feature.icon class="icon icon--accent"/>
                        </div>
                        <h2>{feature.title}</h2>
                    </div>
                    <p class="feature-section__description">{feature.description}</p>
                    <ul class="feature-section__benefits">
                        {benefit_rows(&feature)
                            .map(|(glyph, text)| {
                                view! {
                                    <li class="feature-section__benefit">
                                        <Icon icon=glyph class="icon icon--accent icon--benefit"/>
                                        <span>{text}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button class="btn btn--outline">"Learn More"</button>
                </div>
                <div class="feature-section__visual">
                    <div class="feature-section__placeholder"></div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="features-cta">
            <div class="features-cta__card">
                <h2>"Ready to get started?"</h2>
                <p>
                    "Create teams and boards, invite your friends, and collaborate in real-time with BoardScape."
                </p>
                <A href=CTA_ROUTE attr:class="btn btn--secondary btn--lg">"create your first board"</A>
            </div>
        </section>
    }
}
