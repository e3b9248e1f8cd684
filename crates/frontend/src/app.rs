use crate::content;
use crate::layout::{Footer, Header};
use crate::sections::{AboutSection, ContactSection, HeroSection, MenuSection};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Static site content is shared with every section via context.
    provide_context(content::site());

    view! {
        <Header />
        <main>
            <HeroSection />
            <MenuSection />
            <AboutSection />
            <ContactSection />
        </main>
        <Footer />
    }
}
