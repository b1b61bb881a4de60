use super::SectionHeading;
use crate::catalog::Catalog;
use dioxus::prelude::*;

#[component]
pub fn PhotoGallery() -> Element {
    let catalog = use_context::<Signal<Catalog>>();
    let photos = catalog.read().photos().to_vec();

    rsx! {
        section { id: "gallery", class: "py-20 px-4",
            div { class: "container mx-auto max-w-6xl",
                SectionHeading {
                    title: "Фотогалерея",
                    subtitle: "Красота русских пейзажей и народного искусства",
                }
                div { class: "grid gap-6 md:grid-cols-3",
                    for photo in photos {
                        figure {
                            key: "{photo.id}",
                            class: "group relative overflow-hidden rounded-xl shadow-sm",
                            img {
                                src: "{photo.src}",
                                alt: "{photo.title}",
                                loading: "lazy",
                                class: "h-72 w-full object-cover transition-transform duration-500 group-hover:scale-105",
                            }
                            figcaption { class: "absolute inset-x-0 bottom-0 bg-gradient-to-t from-black/70 to-transparent p-4 text-white",
                                h3 { class: "font-semibold text-lg", "{photo.title}" }
                                p { class: "text-sm text-white/80", "{photo.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
