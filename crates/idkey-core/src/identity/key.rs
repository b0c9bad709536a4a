//! Constructor de claves compuestas.

use crate::constants::SEPARATOR;
use crate::model::{CompositeKey, Token};

/// Une los tokens como `count:token_0:...:token_{n-1}`. Con `sorted`, los
/// tokens se ordenan lexicográficamente (orden de bytes) antes de unirse; el
/// contador nunca participa del orden.
pub fn compose(mut tokens: Vec<Token>, sorted: bool) -> CompositeKey {
    if sorted {
        tokens.sort_unstable();
    }
    let mut out = tokens.len().to_string();
    for token in &tokens {
        out.push(SEPARATOR);
        out.push_str(token.as_str());
    }
    CompositeKey::from_string(out)
}
