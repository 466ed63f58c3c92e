use leptos::prelude::*;

use crate::profile::{Icon, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    // the final entry is the call to action
    let (cta, links) = NAV_LINKS
        .split_last()
        .expect("nav should have at least one link");

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 border-b border-white/5 bg-tech-bg/80 backdrop-blur-md">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <div class="w-8 h-8 bg-tech-accent rounded flex items-center justify-center">
                        <i class=format!("{} text-black", Icon::Terminal.class()) />
                    </div>
                    <span class="font-mono font-bold tracking-tighter text-lg">"Portfolio"</span>
                </div>
                <div class="hidden md:flex items-center gap-8 text-sm font-mono text-gray-400">
                    {links
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=format!("#{}", link.anchor)
                                    class="hover:text-tech-accent transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=format!("#{}", cta.anchor)
                        class="px-4 py-2 bg-tech-accent text-black font-bold rounded hover:bg-tech-accent/90 transition-all"
                    >
                        {cta.label}
                    </a>
                </div>
            </div>
        </nav>
    }
}
