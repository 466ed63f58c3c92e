mod certificates;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod section;
mod services;
mod skills;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-tech-bg text-white font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} - Portfolio") />
        <Router>
            <div class="min-h-screen relative overflow-hidden">
                <div class="fixed inset-0 grid-bg opacity-20 pointer-events-none" />
                <div class="fixed inset-0 bg-gradient-to-b from-transparent via-tech-bg/50 to-tech-bg pointer-events-none" />
                <div class="scanline pointer-events-none" />
                <Header />
                <main class="relative z-10 pt-32 pb-20 px-6">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
