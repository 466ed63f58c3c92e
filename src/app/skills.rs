use leptos::prelude::*;

use super::section::SectionHeader;
use crate::profile::{anchors, Icon, Principle, SkillGroup, PRINCIPLES, SKILL_GROUPS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=anchors::SKILLS class="mb-32">
            <SectionHeader title="Technical" subtitle="SKILLS" icon=Icon::Code />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-12">
                <div class="space-y-8">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillList group /> }).collect_view()}
                </div>
                <Philosophy />
            </div>
        </section>
    }
}

#[component]
fn SkillList(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-sm font-mono text-tech-accent mb-4 flex items-center gap-2">
                <i class=group.icon.class() />
                {group.label}
            </h4>
            <div class="flex flex-wrap gap-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div class="px-3 py-1 bg-tech-surface border border-tech-border rounded-md font-mono text-xs text-gray-400 hover:text-tech-accent hover:border-tech-accent/50 hover:scale-105 hover:-translate-y-0.5 hover:shadow-[0_0_15px_rgba(0,255,65,0.2)] transition-all cursor-default">
                                {*skill}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Philosophy() -> impl IntoView {
    // two columns of two
    let (left, right) = PRINCIPLES.split_at(PRINCIPLES.len() / 2);
    let column = |items: &'static [Principle]| {
        view! {
            <div class="space-y-4">
                {items
                    .iter()
                    .map(|p| {
                        view! {
                            <div class="flex items-start gap-4">
                                <div class=format!("w-1 h-12 bg-tech-accent mt-1 {}", p.accent) />
                                <div>
                                    <h5 class="font-bold mb-1">{p.title}</h5>
                                    <p class="text-sm text-gray-500">{p.blurb}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <div class="lg:col-span-2 bg-tech-surface border border-tech-border rounded-2xl p-8 relative overflow-hidden">
            <div class="absolute top-0 right-0 p-4 opacity-10 text-9xl">
                <i class=Icon::Code.class() />
            </div>
            <h3 class="text-2xl font-bold mb-6">"Development Philosophy"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{column(left)} {column(right)}</div>
        </div>
    }
}
