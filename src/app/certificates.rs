use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use leptos::{
    ev::{DragEvent, Event, MouseEvent},
    html,
    prelude::*,
    task::spawn_local,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{File, FileList, FileReader, ProgressEvent};

use super::section::SectionHeader;
use crate::{
    gallery::{AcceptFilter, Certificate, DataUrl, Gallery, IntakeError},
    profile::{anchors, Icon},
};

/// Reads `file` into a `data:` URL with the browser's `FileReader`.
async fn read_data_url(file: &File) -> Result<DataUrl, IntakeError> {
    let name = file.name();
    let reader = FileReader::new().map_err(|_| IntakeError::Reader(name.clone()))?;

    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));
    let settle = |loaded: bool| {
        let tx = tx.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        })
    };
    let on_load = settle(true);
    let on_fail = settle(false);
    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_fail.as_ref().unchecked_ref()));
    reader.set_onabort(Some(on_fail.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|_| IntakeError::Reader(name.clone()))?;
    let loaded = rx.await.unwrap_or(false);

    reader.set_onload(None);
    reader.set_onerror(None);
    reader.set_onabort(None);

    if !loaded {
        return Err(IntakeError::Failed(name));
    }
    let result = reader.result().map_err(|_| IntakeError::Failed(name))?;
    DataUrl::parse(result.as_string().ok_or(IntakeError::NotDataUrl)?)
}

fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

#[component]
pub fn Certificates() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new());
    let filter = AcceptFilter::default();
    let input_ref = NodeRef::<html::Input>::new();
    let (drag_active, set_drag_active) = signal(false);

    // one task per file; whichever read finishes first is shown first
    let intake = move |files: Vec<File>| {
        for file in files {
            if !filter.admits(&file.name(), &file.type_()) {
                log::debug!("skipping {} ({})", file.name(), file.type_());
                continue;
            }
            spawn_local(async move {
                let read = read_data_url(&file).await;
                gallery.update(|g| {
                    g.complete(file.name(), read);
                });
            });
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active(false);
        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        intake(file_list_to_vec(&files));
    };

    let on_pick = move |_: Event| {
        let Some(el) = input_ref.get_untracked() else {
            return;
        };
        if let Some(files) = el.files() {
            intake(file_list_to_vec(&files));
        }
        // allow picking the same file again
        el.set_value("");
    };

    let open_picker = move |_: MouseEvent| {
        if let Some(el) = input_ref.get_untracked() {
            el.click();
        }
    };

    view! {
        <section id=anchors::CERTIFICATES class="mb-32">
            <SectionHeader title="Recognition & Achievements" subtitle="AWARDS" icon=Icon::Award />
            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                <div
                    class=move || {
                        let state = if drag_active() {
                            "border-tech-accent bg-tech-accent/5"
                        } else {
                            "border-tech-border hover:border-tech-accent/50 bg-tech-surface"
                        };
                        format!(
                            "lg:col-span-1 h-64 border-2 border-dashed rounded-2xl flex flex-col items-center justify-center gap-4 cursor-pointer transition-all {state}",
                        )
                    }
                    on:click=open_picker
                    on:dragover=move |ev: DragEvent| {
                        ev.prevent_default();
                        set_drag_active(true);
                    }
                    on:dragleave=move |_| set_drag_active(false)
                    on:drop=on_drop
                >
                    <input
                        node_ref=input_ref
                        type="file"
                        multiple=true
                        accept=filter.accept_attr()
                        class="hidden"
                        on:click=|ev| ev.stop_propagation()
                        on:change=on_pick
                    />
                    <div class="p-4 bg-tech-bg rounded-full border border-tech-border">
                        <i class=format!("{} text-2xl text-gray-400", Icon::Award.class()) />
                    </div>
                    <div class="text-center px-4">
                        <p class="text-sm font-bold">"Upload Certificate"</p>
                        <p class="text-xs text-gray-500 mt-1">"Drag & drop or click to browse"</p>
                    </div>
                </div>
                <For
                    each=move || gallery.with(|g| g.iter().cloned().collect::<Vec<_>>())
                    key=|cert| cert.id().clone()
                    children=move |cert| view! { <CertificateCard cert gallery /> }
                />
                <Show when=move || gallery.with(Gallery::is_empty)>
                    <div class="lg:col-span-3 h-64 border border-tech-border rounded-2xl flex items-center justify-center bg-tech-surface/50">
                        <p class="text-gray-600 font-mono text-sm italic">
                            "NO_CERTIFICATES_UPLOADED_YET"
                        </p>
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn CertificateCard(cert: Certificate, gallery: RwSignal<Gallery>) -> impl IntoView {
    let id = cert.id().clone();
    view! {
        <div class="h-64 bg-tech-surface border border-tech-border rounded-2xl overflow-hidden relative group animate-pop-in">
            <img
                src=cert.url().as_str().to_string()
                alt=cert.name().to_string()
                class="w-full h-full object-cover opacity-80 group-hover:opacity-100 transition-opacity"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity" />
            <div class="absolute bottom-0 left-0 right-0 p-4 translate-y-full group-hover:translate-y-0 transition-transform">
                <p class="text-xs font-mono text-tech-accent truncate">{cert.name().to_string()}</p>
            </div>
            <button
                aria-label="Remove certificate"
                class="absolute top-2 right-2 p-1.5 bg-black/50 hover:bg-red-500/50 rounded-lg text-white opacity-0 group-hover:opacity-100 transition-all"
                on:click=move |ev| {
                    ev.stop_propagation();
                    gallery.update(|g| {
                        g.remove(&id);
                    });
                }
            >
                "✕"
            </button>
        </div>
    }
}
