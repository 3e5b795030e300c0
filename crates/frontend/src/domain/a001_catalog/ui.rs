use contracts::domain::a001_catalog::{CatalogItem, CatalogSections};
use leptos::prelude::*;

#[component]
pub fn CollectionsView(sections: CatalogSections) -> impl IntoView {
    if sections.is_empty() {
        return view! { <div class="empty">"No collections yet"</div> }.into_any();
    }

    sections
        .into_iter()
        .map(|section| {
            view! {
                <section class="collection">
                    <h2>{section.category.to_uppercase()}</h2>
                    <div class="grid">
                        {section.items.into_iter().map(catalog_card).collect_view()}
                    </div>
                </section>
            }
        })
        .collect_view()
        .into_any()
}

fn catalog_card(item: CatalogItem) -> impl IntoView {
    let price = item.price.map(|p| view! { <div class="price">{format!("{} Stars", p)}</div> });
    view! {
        <div class=format!("card {}", item.rarity)>
            <img src=item.img alt=item.name.clone() />
            <div class="rarity">{item.rarity.clone()}</div>
            {price}
        </div>
    }
}
