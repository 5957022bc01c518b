//! Hash routes for the two pages.
//!
//! `#/` is the program list and `#/cruise/{expocode}` a cruise page. The
//! expocode is percent-encoded in the hash, so plain expocodes appear
//! verbatim. On the web the route lives in the location hash so reloads and
//! back/forward navigation work.

const CRUISE_PREFIX: &str = "/cruise/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Programs,
    Cruise(String),
}

impl Route {
    /// Parses a location hash. Anything unrecognized is the program list.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        match path.strip_prefix(CRUISE_PREFIX) {
            Some(segment) if !segment.is_empty() => {
                let expocode = urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .unwrap_or_else(|_| segment.to_string());
                Route::Cruise(expocode)
            }
            _ => Route::Programs,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::Programs => "#/".to_string(),
            Route::Cruise(expocode) => {
                format!("#{}{}", CRUISE_PREFIX, urlencoding::encode(expocode))
            }
        }
    }
}

/// Route currently shown in the browser location.
#[cfg(target_arch = "wasm32")]
pub fn current_route() -> Option<Route> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Some(Route::from_hash(&hash))
}

/// Native builds have no location; the app keeps its own route.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_route() -> Option<Route> {
    None
}

/// Records a navigation in the browser history.
#[cfg(target_arch = "wasm32")]
pub fn push_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(e) =
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&route.to_hash()))
    {
        log::warn!("Failed to push route {}: {:?}", route.to_hash(), e);
    }
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_route(_route: &Route) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cruise_hash() {
        assert_eq!(
            Route::from_hash("#/cruise/33RR20090320"),
            Route::Cruise("33RR20090320".to_string())
        );
        assert_eq!(
            Route::from_hash("/cruise/49NZ_1995"),
            Route::Cruise("49NZ_1995".to_string())
        );
    }

    #[test]
    fn test_unrecognized_hash_is_program_list() {
        assert_eq!(Route::from_hash(""), Route::Programs);
        assert_eq!(Route::from_hash("#/"), Route::Programs);
        assert_eq!(Route::from_hash("#/cruise/"), Route::Programs);
        assert_eq!(Route::from_hash("#/about"), Route::Programs);
    }

    #[test]
    fn test_encoded_hash_decodes_expocode() {
        assert_eq!(
            Route::from_hash("#/cruise/NATRE%20%221992%22"),
            Route::Cruise("NATRE \"1992\"".to_string())
        );

        let route = Route::Cruise("TTIDE 2015/A".to_string());
        assert_eq!(route.to_hash(), "#/cruise/TTIDE%202015%2FA");
        assert_eq!(Route::from_hash(&route.to_hash()), route);
    }

    #[test]
    fn test_hash_round_trip() {
        for route in [Route::Programs, Route::Cruise("A1".to_string())] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
        assert_eq!(Route::Cruise("A1".to_string()).to_hash(), "#/cruise/A1");
    }
}
