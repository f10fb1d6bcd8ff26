// src/macros.rs

/// `String` shorthand. `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into one owned `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `Vec<String>` from a list of `&str`-likes (header rows, target lists in tests).
#[macro_export]
macro_rules! strs {
    ($($item:expr),* $(,)?) => {
        vec![$( ::std::string::String::from($item) ),*]
    };
}
