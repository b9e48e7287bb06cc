/// Concatenates string-like values into an owned `String`.
#[macro_export]
macro_rules! concat_str {
    ($($part:expr),+ $(,)?) => {{
        let mut out = String::new();
        $(out.push_str(::core::convert::AsRef::<str>::as_ref(&$part));)+
        out
    }};
}
