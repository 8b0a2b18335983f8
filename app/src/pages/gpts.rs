//! GPTs Lab page: `/gpts`.

use leptos::prelude::*;
use leptos_meta::Title;
use vitrine_core::trail_for;
use vitrine_ui::Breadcrumbs;

#[component]
pub fn GptsPage() -> impl IntoView {
    view! {
      <Title text=crate::page_title("GPTs Lab") />
      <Breadcrumbs trail=trail_for("gpts", None) />

      <section class="page-header">
        <h1>"GPTs Lab"</h1>
        <p>"Custom GPT experiments for energy and CCTV workflows."</p>
      </section>
    }
}
