use yew::prelude::*;

const APP_NAME: &str = "Tractian";

/// Full document title for a page.
pub fn page_title(page: &str) -> String {
    format!("{page} — {APP_NAME}")
}

/// Sets the document title while the page is mounted and restores the
/// previous one on unmount.
#[hook]
pub fn use_title(page: &str) {
    let title = page_title(page);
    use_effect_with(title, |title| {
        let document = web_sys::window().and_then(|w| w.document());
        let previous = document.as_ref().map(|doc| doc.title());
        if let Some(doc) = &document {
            doc.set_title(title);
        }
        move || {
            if let (Some(doc), Some(previous)) = (document, previous) {
                doc.set_title(&previous);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_the_app_name() {
        assert_eq!(page_title("Empresas"), "Empresas — Tractian");
        assert_eq!(page_title("Editar Ativo"), "Editar Ativo — Tractian");
    }
}
