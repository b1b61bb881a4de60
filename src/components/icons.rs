use dioxus::prelude::*;

/// Stroke icons used across the portal. Unknown names render an empty circle.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    let shapes = match name.as_str() {
        "play" => rsx! {
            polygon { points: "6 3 20 12 6 21 6 3", fill: "currentColor" }
        },
        "pause" => rsx! {
            rect { x: "6", y: "4", width: "4", height: "16", fill: "currentColor" }
            rect { x: "14", y: "4", width: "4", height: "16", fill: "currentColor" }
        },
        "skip-back" => rsx! {
            polygon { points: "19 20 9 12 19 4 19 20", fill: "currentColor" }
            line { x1: "5", y1: "19", x2: "5", y2: "5" }
        },
        "skip-forward" => rsx! {
            polygon { points: "5 4 15 12 5 20 5 4", fill: "currentColor" }
            line { x1: "19", y1: "5", x2: "19", y2: "19" }
        },
        "rewind" => rsx! {
            polygon { points: "11 19 2 12 11 5 11 19" }
            polygon { points: "22 19 13 12 22 5 22 19" }
        },
        "fast-forward" => rsx! {
            polygon { points: "13 19 22 12 13 5 13 19" }
            polygon { points: "2 19 11 12 2 5 2 19" }
        },
        "volume-x" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            line { x1: "22", y1: "9", x2: "16", y2: "15" }
            line { x1: "16", y1: "9", x2: "22", y2: "15" }
        },
        "volume-low" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
        },
        "volume-high" => rsx! {
            polygon { points: "11 5 6 9 2 9 2 15 6 15 11 19 11 5" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        },
        "music" => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        "video" => rsx! {
            polygon { points: "23 7 16 12 23 17 23 7" }
            rect { x: "1", y: "5", width: "15", height: "14", rx: "2", ry: "2" }
        },
        "image" => rsx! {
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
            circle { cx: "8.5", cy: "8.5", r: "1.5" }
            polyline { points: "21 15 16 10 5 21" }
        },
        "upload" => rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            polyline { points: "17 8 12 3 7 8" }
            line { x1: "12", y1: "3", x2: "12", y2: "15" }
        },
        "message" => rsx! {
            path { d: "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z" }
        },
        "mail" => rsx! {
            path { d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" }
            polyline { points: "22,6 12,13 2,6" }
        },
        "send" => rsx! {
            line { x1: "22", y1: "2", x2: "11", y2: "13" }
            polygon { points: "22 2 15 22 11 13 2 9 22 2" }
        },
        "x" => rsx! {
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        },
        "check" => rsx! {
            polyline { points: "20 6 9 17 4 12" }
        },
        "alert" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", y1: "8", x2: "12", y2: "12" }
            line { x1: "12", y1: "16", x2: "12.01", y2: "16" }
        },
        "loader" => rsx! {
            circle { cx: "12", cy: "12", r: "10", opacity: "0.25" }
            path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    };

    let class = if name == "loader" {
        format!("{class} animate-spin")
    } else {
        class
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {shapes}
        }
    }
}

/// Icon name for a volume level in percent.
pub fn volume_icon(volume: u8) -> &'static str {
    match volume {
        0 => "volume-x",
        1..=49 => "volume-low",
        _ => "volume-high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_icon_tracks_level() {
        assert_eq!(volume_icon(0), "volume-x");
        assert_eq!(volume_icon(30), "volume-low");
        assert_eq!(volume_icon(50), "volume-high");
        assert_eq!(volume_icon(100), "volume-high");
    }
}
