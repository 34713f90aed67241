use anyhow::{Context, Result};
use std::collections::HashMap;
use triproute::App;

/// Parses `key=value`
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))
}

pub fn execute(app: &App, name: &str, params: &[(String, String)]) -> Result<()> {
    let params: HashMap<String, String> = params.iter().cloned().collect();

    let url = app.router().url_for(name, &params).with_context(|| {
        match app.router().get_route_by_name(name) {
            Some(route) => format!("route `{}` needs parameters {:?}", name, route.params),
            None => format!("no route named `{}`", name),
        }
    })?;

    println!("{}", url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("id=7"),
            Ok(("id".to_string(), "7".to_string()))
        );
        assert_eq!(
            parse_param("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert!(parse_param("id").is_err());
        assert!(parse_param("=7").is_err());
    }
}
