// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Ordered selector chain for one card field:
/// `chain!(Location: ".location", ".job-location")`
#[macro_export]
macro_rules! chain {
    ($field:ident : $($sel:expr),+ $(,)?) => {
        $crate::engine::types::FieldChain {
            field: $crate::engine::types::Field::$field,
            selectors: &[$($sel),+],
        }
    };
}
