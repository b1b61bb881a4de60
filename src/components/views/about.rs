use super::{SectionHeading, PORTAL_NAME};
use dioxus::prelude::*;

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "py-20 px-4 bg-white",
            div { class: "container mx-auto max-w-4xl",
                SectionHeading { title: "О проекте" }
                div { class: "space-y-8 text-lg leading-relaxed text-zinc-700",
                    p {
                        span { class: "text-3xl font-bold text-amber-700", "{PORTAL_NAME}" }
                        " — это авторский культурный проект, посвященный сохранению и популяризации русской культуры, природы и традиций."
                    }
                    div {
                        h3 { class: "text-2xl font-semibold mb-4 text-zinc-900", "Миссия проекта" }
                        p { class: "mb-4",
                            "Наша цель — создать пространство, где каждый может прикоснуться к красоте русской земли, узнать о её культурном наследии через авторские аудио и видео произведения."
                        }
                        p {
                            "Мы верим, что через искусство и творчество можно передать любовь к родной земле, её истории и традициям следующим поколениям."
                        }
                    }
                    div {
                        h3 { class: "text-2xl font-semibold mb-4 text-zinc-900", "Об авторе" }
                        p {
                            "Автор проекта — энтузиаст и любитель русской культуры, создающий уникальный контент о природе, истории и традициях нашей страны."
                        }
                    }
                }
            }
        }
    }
}
