//! Command line parsing shared by all platforms
//!
//! On the web there is no command line, so flags come from GET parameters instead:
//! `?cliflag=value` becomes `--flag value` and `?envNAME=value` is exposed through
//! [`get_env`].

use clap::Parser;
#[cfg(target_arch = "wasm32")]
use std::collections::HashMap;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static ENV_MAP: std::cell::RefCell<HashMap<String, String>> = std::cell::RefCell::new(HashMap::new());
}

/// Generic function to get environment variable, parsing it to the desired type.
pub fn get_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    #[cfg(target_arch = "wasm32")]
    {
        ENV_MAP.with(|map| map.borrow().get(key).and_then(|s| s.parse().ok()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::env::var(key).ok().and_then(|s| s.parse().ok())
    }
}

/// Arguments and environment values extracted from a URL query string
#[derive(Debug, Default, PartialEq)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) struct QueryArgs {
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Split `href` into clap-style arguments (`cli` prefix) and env values (`env` prefix).
/// Other parameters are ignored.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn query_args(program: &str, href: &str) -> QueryArgs {
    let mut out = QueryArgs {
        args: vec![program.to_string()],
        env: Vec::new(),
    };

    let Some((_, query)) = href.split_once('?') else {
        return out;
    };
    let query = query.split('#').next().unwrap_or_default();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if let Some(flag) = key.strip_prefix("cli") {
            if !flag.is_empty() {
                out.args.push(format!("--{}", flag));
            }
            if !value.is_empty() {
                out.args.push(value.to_string());
            }
        } else if let Some(name) = key.strip_prefix("env") {
            if !name.is_empty() {
                out.env.push((name.to_string(), value.to_string()));
            }
        }
    }
    out
}

/// Parses from the command line arguments on native and from GET parameters on web.
pub fn parse_args<T: Parser>() -> Result<T, clap::Error> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        T::try_parse()
    }
    #[cfg(target_arch = "wasm32")]
    {
        use clap::CommandFactory;

        let program = T::command().get_name().to_string();
        let query = query_args(&program, &location_href());
        T::try_parse_from(query.args)
    }
}

/// Parses environment variables from GET parameters on web.
pub fn parse_env() {
    #[cfg(target_arch = "wasm32")]
    {
        let query = query_args("", &location_href());
        ENV_MAP.with(|map| map.borrow_mut().extend(query.env));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // On native, environment variables are already set
    }
}

#[cfg(target_arch = "wasm32")]
fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}
