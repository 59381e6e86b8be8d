use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Фокус фонового изображения в процентах
#[derive(Debug, Clone, PartialEq)]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

impl FocalPoint {
    pub fn object_position(&self) -> String {
        format!("{}% {}%", self.x, self.y)
    }
}

/// Parses an image title of the form `data-focal:{x},{y}`.
pub fn parse_focal_point(title: &str) -> Option<FocalPoint> {
    if !title.contains("data-focal") {
        return None;
    }
    let coords = title.split(':').nth(1)?;
    let (x, y) = coords.split_once(',')?;
    let y = y.split(',').next().unwrap_or(y);

    Some(FocalPoint {
        x: x.trim().parse().ok()?,
        y: y.trim().parse().ok()?,
    })
}

/// Positions the hero background image on the authored focal point.
/// The marker title is removed once applied; anything else is left alone.
pub fn decorate(block: &Element) {
    let Ok(Some(img)) = block.query_selector("img") else {
        return;
    };
    let Ok(img) = img.dyn_into::<HtmlElement>() else {
        return;
    };

    let dataset = img.dataset();
    let Some(title) = dataset.get("title") else {
        return;
    };
    let Some(point) = parse_focal_point(&title) else {
        if title.contains("data-focal") {
            log::warn!("hero: malformed focal point `{}`", title);
        }
        return;
    };

    dataset.delete("title");
    if let Err(e) = img
        .style()
        .set_property("object-position", &point.object_position())
    {
        log::error!("hero: cannot set object-position: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_focal_point() {
        let point = parse_focal_point("data-focal:30,70").unwrap();
        assert_eq!(point, FocalPoint { x: 30.0, y: 70.0 });
        assert_eq!(point.object_position(), "30% 70%");

        let point = parse_focal_point("data-focal: 12.5 , 40").unwrap();
        assert_eq!(point.object_position(), "12.5% 40%");
    }

    #[test]
    fn test_parse_focal_point_rejects_other_titles() {
        assert_eq!(parse_focal_point("A mountain at dusk"), None);
        assert_eq!(parse_focal_point("data-focal"), None);
        assert_eq!(parse_focal_point("data-focal:30"), None);
        assert_eq!(parse_focal_point("data-focal:left,top"), None);
    }
}
