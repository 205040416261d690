//! Form payload for the upstream lookup form.

use crate::config::{
    FORM_FIELD_COLONIA, FORM_FIELD_MUNICIPALITY, FORM_FIELD_POSTAL_CODE, FORM_FIELD_STATE,
};
use crate::models::QueryRequest;

/// Builds the url-encoded form fields for one submission.
///
/// `estado` and `municipio` are required by the form but unused, so they are
/// always empty; `colonia` is empty on the first step.
pub fn form_fields(request: &QueryRequest) -> [(&'static str, &str); 4] {
    let colonia = request.colonia.as_ref().map_or("", |c| c.as_str());
    [
        (FORM_FIELD_POSTAL_CODE, request.postal_code.as_str()),
        (FORM_FIELD_COLONIA, colonia),
        (FORM_FIELD_STATE, ""),
        (FORM_FIELD_MUNICIPALITY, ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColoniaName, PostalCode};

    #[test]
    fn test_form_fields_initial_lookup() {
        let request = QueryRequest::initial(PostalCode::parse("01000").unwrap());
        assert_eq!(
            form_fields(&request),
            [("cp", "01000"), ("colonia", ""), ("estado", ""), ("municipio", "")]
        );
    }

    #[test]
    fn test_form_fields_with_colonia() {
        let request = QueryRequest::with_colonia(
            PostalCode::parse("44100").unwrap(),
            ColoniaName::parse("Americana").unwrap(),
        );
        assert_eq!(
            form_fields(&request),
            [
                ("cp", "44100"),
                ("colonia", "Americana"),
                ("estado", ""),
                ("municipio", "")
            ]
        );
    }
}
