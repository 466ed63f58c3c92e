use leptos::prelude::*;

use crate::profile::{Icon, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-tech-border py-10 px-6 relative z-10">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex items-center gap-2" title=format!("built {}", env!("BUILD_TIME"))>
                    <i class=format!("{} text-tech-accent", Icon::Terminal.class()) />
                    <span class="font-mono text-sm text-gray-500">
                        {format!("© {} Portfolio. ALL_RIGHTS_RESERVED.", env!("BUILD_YEAR"))}
                    </span>
                </div>
                <div class="flex items-center gap-6 text-xs font-mono text-gray-500">
                    <a href="#" class="hover:text-tech-accent transition-colors">
                        "PRIVACY_POLICY"
                    </a>
                    <a href="#" class="hover:text-tech-accent transition-colors">
                        "TERMS_OF_SERVICE"
                    </a>
                    <div class="flex items-center gap-4 border-l border-tech-border pl-6">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        aria-label=link.label
                                        class="hover:text-tech-accent transition-colors"
                                    >
                                        <i class=link.icon.class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
