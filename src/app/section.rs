use leptos::prelude::*;

use crate::profile::Icon;

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str, icon: Icon) -> impl IntoView {
    view! {
        <div class="mb-12">
            <div class="flex items-center gap-3 mb-2">
                <div class="p-2 bg-tech-accent/10 rounded-lg border border-tech-accent/20">
                    <i class=format!("{} text-tech-accent", icon.class()) />
                </div>
                <span class="text-tech-accent font-mono text-sm tracking-widest uppercase">
                    {subtitle}
                </span>
            </div>
            <h2 class="text-4xl md:text-5xl font-bold tracking-tighter">{title}</h2>
        </div>
    }
}
