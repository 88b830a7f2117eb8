#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Named application routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Logout,
}

impl RouteName {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Logout => "/logout",
        }
    }
}

/// One entry of a route table. Child paths are relative to their parent.
#[derive(Debug)]
pub struct RouteDef {
    pub name: RouteName,
    pub path: &'static str,
    pub requires_auth: bool,
    pub children: &'static [RouteDef],
}

pub static ROUTES: &[RouteDef] = &[
    RouteDef { name: RouteName::Home, path: "/", requires_auth: true, children: &[] },
    RouteDef { name: RouteName::Login, path: "/login", requires_auth: false, children: &[] },
    RouteDef { name: RouteName::Logout, path: "/logout", requires_auth: false, children: &[] },
];

/// Match `path` against `table`, returning the matched chain root-first.
///
/// Query strings, fragments and trailing slashes are ignored. An unknown
/// path yields an empty chain.
#[must_use]
pub fn resolve(table: &'static [RouteDef], path: &str) -> Vec<&'static RouteDef> {
    let target = normalize(path);
    resolve_under(table, "", &target)
}

fn resolve_under(table: &'static [RouteDef], prefix: &str, target: &str) -> Vec<&'static RouteDef> {
    for def in table {
        let full = join(prefix, def.path);
        if full == target {
            return vec![def];
        }
        if !def.children.is_empty() && is_ancestor(&full, target) {
            let mut chain = resolve_under(def.children, &full, target);
            if !chain.is_empty() {
                chain.insert(0, def);
                return chain;
            }
        }
    }
    Vec::new()
}

fn is_ancestor(full: &str, target: &str) -> bool {
    full == "/" || target.strip_prefix(full).is_some_and(|rest| rest.starts_with('/'))
}

fn join(prefix: &str, segment: &str) -> String {
    if segment.starts_with('/') {
        return normalize(segment);
    }
    normalize(&format!("{}/{segment}", prefix.trim_end_matches('/')))
}

fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
