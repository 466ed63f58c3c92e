use leptos::prelude::*;

use crate::profile::{anchors, NAME, PORTRAIT_URL, SOCIAL_LINKS, SUMMARY};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id=anchors::ABOUT class="mb-32">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div>
                    <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-tech-accent/10 border border-tech-accent/20 text-tech-accent text-xs font-mono mb-6 animate-slide-in">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-tech-accent opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-tech-accent"></span>
                        </span>
                        "SYSTEM_STATUS: ONLINE"
                    </div>
                    <div class="relative mb-8">
                        <h1 class="text-6xl md:text-8xl font-bold tracking-tighter leading-none animate-rise">
                            "I BUILD " <br />
                            <span class="text-tech-accent">"DIGITAL"</span> " " <br />
                            "INFRASTRUCTURE"
                        </h1>
                        <ProfileCard />
                    </div>
                    <p class="text-gray-400 text-lg max-w-xl mb-10 leading-relaxed animate-fade-in">
                        {SUMMARY}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <button class="px-8 py-4 bg-tech-accent text-black font-bold rounded-lg flex items-center gap-2 hover:scale-105 transition-transform">
                            "VIEW_PROJECTS " <span aria-hidden="true">"›"</span>
                        </button>
                        <div class="flex items-center gap-4 px-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-2 text-gray-400 hover:text-tech-accent transition-colors text-2xl"
                                        >
                                            <i class=link.icon.class() />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <Portrait />
            </div>
        </section>
    }
}

/// Floating name badge next to the headline.
#[component]
fn ProfileCard() -> impl IntoView {
    view! {
        <div class="absolute -top-10 -right-10 hidden lg:block animate-float">
            <div class="bg-tech-surface border border-tech-accent p-4 rounded-xl shadow-[0_0_20px_rgba(0,255,65,0.2)]">
                <p class="text-xs font-mono text-tech-accent mb-1">"PPROFILE"</p>
                <p class="text-xl font-bold font-mono tracking-tight text-white">{NAME}</p>
            </div>
        </div>
    }
}

#[component]
fn Portrait() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="aspect-square rounded-2xl overflow-hidden border border-tech-border bg-tech-surface relative group">
                <img
                    src=PORTRAIT_URL
                    alt="Profile"
                    referrerpolicy="no-referrer"
                    class="w-full h-full object-cover opacity-60 group-hover:scale-110 transition-transform duration-700"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-tech-bg via-transparent to-transparent" />
                <div class="absolute top-4 right-4 font-mono text-[10px] text-tech-accent/50 text-right">
                    "LAT: 37.7749" <br /> "LONG: -122.4194" <br /> "ALT: 12.4m"
                </div>
                <div class="absolute bottom-4 left-4 font-mono text-[10px] text-tech-accent/50">
                    "SCANNING_BIOMETRICS..." <br /> "MATCH_FOUND: 99.8%"
                </div>
            </div>
            <div class="absolute -top-2 -left-2 w-8 h-8 border-t-2 border-l-2 border-tech-accent" />
            <div class="absolute -bottom-2 -right-2 w-8 h-8 border-b-2 border-r-2 border-tech-accent" />
        </div>
    }
}
