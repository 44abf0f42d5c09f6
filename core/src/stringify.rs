//! Human-readable rendering of listings for logs and demos.
//!
//! Output looks like `Listing{id:"abc", title:"Engineer"}`: strings are
//! quoted and escaped, empty fields are left out, and sequences render as
//! `[a b c]`.

use std::fmt;

use crate::types::Listing;

/// Values that can render themselves in the brace-delimited debug format.
pub trait Stringify {
    fn write_into(&self, out: &mut String);

    /// Whether a field holding this value is left out of its parent record.
    fn is_blank(&self) -> bool {
        false
    }

    fn stringify(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }
}

impl Stringify for str {
    fn write_into(&self, out: &mut String) {
        out.push_str(&format!("{self:?}"));
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Stringify for String {
    fn write_into(&self, out: &mut String) {
        self.as_str().write_into(out);
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Stringify> Stringify for [T] {
    fn write_into(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            item.write_into(out);
        }
        out.push(']');
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Stringify> Stringify for Vec<T> {
    fn write_into(&self, out: &mut String) {
        self.as_slice().write_into(out);
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Stringify> Stringify for Option<T> {
    fn write_into(&self, out: &mut String) {
        match self {
            Some(value) => value.write_into(out),
            None => out.push_str("<nil>"),
        }
    }

    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

/// Write `name{field:value, ...}`, skipping blank fields.
fn write_record(out: &mut String, name: &str, fields: &[(&str, &dyn Stringify)]) {
    out.push_str(name);
    out.push('{');
    let mut sep = false;
    for (key, value) in fields {
        if value.is_blank() {
            continue;
        }
        if sep {
            out.push_str(", ");
        }
        sep = true;
        out.push_str(key);
        out.push(':');
        value.write_into(out);
    }
    out.push('}');
}

impl Stringify for Listing {
    fn write_into(&self, out: &mut String) {
        write_record(
            out,
            "Listing",
            &[
                ("id", &self.id),
                ("created_at", &self.created_at),
                ("title", &self.title),
                ("location", &self.location),
                ("type", &self.kind),
                ("description", &self.description),
                ("how_to_apply", &self.how_to_apply),
                ("company", &self.company),
                ("company_url", &self.company_url),
                ("company_logo", &self.company_logo),
                ("url", &self.url),
            ],
        );
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, title: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            ..Listing::default()
        }
    }

    #[test]
    fn empty_fields_are_omitted() {
        assert_eq!(
            listing("abc", "Engineer").stringify(),
            r#"Listing{id:"abc", title:"Engineer"}"#
        );
        assert_eq!(Listing::default().stringify(), "Listing{}");
    }

    #[test]
    fn fields_follow_wire_order() {
        let l = Listing {
            kind: "Full Time".to_string(),
            company: "Example Co".to_string(),
            ..listing("abc", "Engineer")
        };
        assert_eq!(
            l.stringify(),
            r#"Listing{id:"abc", title:"Engineer", type:"Full Time", company:"Example Co"}"#
        );
    }

    #[test]
    fn quotes_inside_values_are_escaped() {
        let l = Listing {
            how_to_apply: r#"<a href="mailto:x@y">apply</a>"#.to_string(),
            ..Listing::default()
        };
        assert_eq!(
            l.stringify(),
            r#"Listing{how_to_apply:"<a href=\"mailto:x@y\">apply</a>"}"#
        );
    }

    #[test]
    fn sequences_render_space_separated() {
        let listings = vec![listing("a", "One"), listing("b", "Two")];
        assert_eq!(
            listings.stringify(),
            r#"[Listing{id:"a", title:"One"} Listing{id:"b", title:"Two"}]"#
        );
        assert_eq!(Vec::<Listing>::new().stringify(), "[]");
    }

    #[test]
    fn nested_sequences_and_options() {
        let nested = vec![vec!["x".to_string()], vec![]];
        assert_eq!(nested.stringify(), r#"[["x"] []]"#);
        assert_eq!(None::<Listing>.stringify(), "<nil>");
        assert_eq!(Some(listing("a", "")).stringify(), r#"Listing{id:"a"}"#);
    }

    #[test]
    fn display_matches_stringify() {
        let l = listing("abc", "Engineer");
        assert_eq!(l.to_string(), l.stringify());
    }
}
