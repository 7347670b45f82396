use crate::parsing::inline::types::SpanKind;

/// A paired inline marker and the kind of span found between two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: SpanKind,
}

impl Delimiter {
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: SpanKind::Code,
    };
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: SpanKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "*",
        kind: SpanKind::Italic,
    };

    /// Split order. `**` must run before `*` or the italic pass would split
    /// on half of a bold marker.
    pub const ORDER: [Delimiter; 3] = [Self::CODE, Self::BOLD, Self::ITALIC];
}
