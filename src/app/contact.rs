use std::time::Duration;

use leptos::{either::Either, html, prelude::*};

use super::section::SectionHeader;
use crate::{
    contact::{simulate_send, ContactMessage, SendingFlag, Timer},
    profile::{anchors, Icon, EMAIL, LOCATION},
};

#[derive(Clone, Copy)]
struct BrowserTimer;

impl Timer for BrowserTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) {
        set_timeout(callback, delay);
    }
}

#[derive(Clone, Copy)]
struct FormFlag(RwSignal<bool>);

impl SendingFlag for FormFlag {
    fn get(&self) -> bool {
        self.0.get_untracked()
    }

    fn set(&self, sending: bool) {
        self.0.set(sending);
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=anchors::CONTACT class="mb-20">
            <div class="bg-tech-surface border border-tech-border rounded-3xl p-8 md:p-12 relative overflow-hidden">
                <div class="absolute top-0 right-0 w-64 h-64 bg-tech-accent/5 blur-[100px] rounded-full" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 relative z-10">
                    <div>
                        <SectionHeader
                            title="Let's Build Something Great"
                            subtitle="CONTACT"
                            icon=Icon::Mail
                        />
                        <p class="text-gray-400 mb-8 leading-relaxed">
                            "Currently accepting new projects and collaboration opportunities. Drop a message and let's discuss your next digital breakthrough."
                        </p>
                        <div class="space-y-6">
                            <Detail label="Email" value=EMAIL icon=Icon::Mail />
                            <Detail label="Location" value=LOCATION icon=Icon::Globe />
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Detail(label: &'static str, value: &'static str, icon: Icon) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4">
            <div class="w-10 h-10 bg-tech-bg border border-tech-border rounded-lg flex items-center justify-center">
                <i class=format!("{} text-tech-accent", icon.class()) />
            </div>
            <div>
                <p class="text-xs text-gray-500 font-mono uppercase">{label}</p>
                <p class="font-bold">{value}</p>
            </div>
        </div>
    }
}

const FIELD_CLASS: &str = "w-full bg-tech-bg border border-tech-border rounded-lg px-4 py-3 focus:border-tech-accent outline-none transition-colors text-white";

/// Form whose submit only toggles the "sending" state for a moment.
#[component]
fn ContactForm() -> impl IntoView {
    let is_sending = RwSignal::new(false);
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let read_message = move || ContactMessage {
        name: name_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        email: email_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        subject: subject_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
        message: message_ref.get_untracked().map(|el| el.value()).unwrap_or_default(),
    };

    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                simulate_send(&FormFlag(is_sending), &BrowserTimer, read_message());
            }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div class="space-y-2">
                    <label for="contact_name" class="text-xs font-mono text-gray-500 uppercase">
                        "Full Name"
                    </label>
                    <input
                        id="contact_name"
                        node_ref=name_ref
                        type="text"
                        placeholder="John Doe"
                        required=true
                        class=FIELD_CLASS
                    />
                </div>
                <div class="space-y-2">
                    <label for="contact_email" class="text-xs font-mono text-gray-500 uppercase">
                        "Email Address"
                    </label>
                    <input
                        id="contact_email"
                        node_ref=email_ref
                        type="email"
                        placeholder="john@example.com"
                        required=true
                        class=FIELD_CLASS
                    />
                </div>
            </div>
            <div class="space-y-2">
                <label for="contact_subject" class="text-xs font-mono text-gray-500 uppercase">
                    "Subject"
                </label>
                <input
                    id="contact_subject"
                    node_ref=subject_ref
                    type="text"
                    placeholder="Project Inquiry"
                    required=true
                    class=FIELD_CLASS
                />
            </div>
            <div class="space-y-2">
                <label for="contact_message" class="text-xs font-mono text-gray-500 uppercase">
                    "Message"
                </label>
                <textarea
                    id="contact_message"
                    node_ref=message_ref
                    rows=4
                    placeholder="Tell me about your project..."
                    required=true
                    class=format!("{FIELD_CLASS} resize-none")
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=move || is_sending.get()
                class="w-full py-4 bg-tech-accent text-black font-bold rounded-lg hover:bg-tech-accent/90 transition-all flex items-center justify-center gap-2 disabled:opacity-50"
            >
                {move || {
                    if is_sending.get() {
                        Either::Left(
                            view! {
                                "SENDING_PACKETS... "
                                <span class="animate-pulse">"_"</span>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                "SEND_MESSAGE "
                                <span aria-hidden="true">"›"</span>
                            },
                        )
                    }
                }}
            </button>
        </form>
    }
}
