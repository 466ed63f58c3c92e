use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    certificates::Certificates, contact::Contact, hero::Hero, services::Services,
    skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="I Build Digital Infrastructure" />
        <div class="max-w-7xl mx-auto">
            <Hero />
            <Services />
            <Skills />
            <Certificates />
            <Contact />
        </div>
    }
}
