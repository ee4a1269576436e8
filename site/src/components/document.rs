//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::{About, CattleSales, Carbon, Contact, Footer, Grazing, Hero, Hunting, Nav};
use crate::config::SiteConfig;
use crate::styles::{SITE_CSS, content_security_policy};

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(
    config: SiteConfig,
    /// Year printed in the footer copyright line
    year: i32,
) -> impl IntoView {
    let csp = content_security_policy(&config);
    let SiteConfig { meta, contact } = config;

    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <meta name="viewport" content=meta.viewport />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <Nav />
                <main>
                    <Hero />
                    <About />
                    <Grazing />
                    <CattleSales />
                    <Hunting />
                    <Carbon />
                    <Contact contact=contact />
                </main>
                <Footer year=year />
            </body>
        </html>
    }
}
