//! Landing page: `/`.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
      <section class="hero">
        <h1>{crate::SITE_NAME}</h1>
        <p class="tagline">
          "Product manager and frontend engineer. Energy and CCTV projects, interactive calculators, and an occasional blog."
        </p>
        <div class="hero-links">
          <a class="btn btn-accent" href="/projects">"Interactive Lab"</a>
          <a class="btn" href="/blog">"Blog"</a>
        </div>
      </section>

      <section id="contact" class="contact">
        <h2>"Get in touch"</h2>
        <p>
          <a href="mailto:hello@oleksandr.page">"hello@oleksandr.page"</a>
        </p>
      </section>
    }
}
