use leptos::prelude::*;

use super::section::SectionHeader;
use crate::profile::{anchors, Icon, Service, SERVICES};

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=anchors::SERVICES class="mb-32">
            <SectionHeader title="Expertise & Solutions" subtitle="SERVICES" icon=Icon::Cpu />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {SERVICES.iter().map(|service| view! { <ServiceCard service /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <div class="p-6 bg-tech-surface border border-tech-border rounded-xl group hover:border-tech-accent/50 hover:-translate-y-1 transition-all">
            <div class="w-12 h-12 bg-tech-bg border border-tech-border rounded-lg flex items-center justify-center mb-4 group-hover:border-tech-accent/30 group-hover:bg-tech-accent/5 transition-all">
                <i class=format!(
                    "{} text-2xl text-gray-400 group-hover:text-tech-accent transition-all",
                    service.icon.class(),
                ) />
            </div>
            <h3 class="text-xl font-bold mb-2 group-hover:text-tech-accent transition-all">
                {service.title}
            </h3>
            <p class="text-gray-500 text-sm leading-relaxed">{service.description}</p>
        </div>
    }
}
