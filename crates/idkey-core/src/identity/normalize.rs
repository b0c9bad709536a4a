//! Normalizador: valor arbitrario → token canónico.
//!
//! Orden de resolución (gana la primera regla que aplica):
//! 1. primitivos envueltos se desenvuelven;
//! 2. cero numérico: `number:+0` / `number:-0`;
//! 3. símbolos: `symbol:Symbol(<descripción>)`;
//! 4. nullish, number, boolean, string, bigint: `<tipo>:<texto>` con signo
//!    explícito para números (`NaN` e `Infinity` son literales fijos);
//! 5. objetos que acepta un helper registrado: se normaliza el valor que
//!    produce su generador;
//! 6. objetos con identidad personalizada (si la llamada lo permite y no
//!    fueron visitados): se normaliza el sustituto;
//! 7. el resto: token de la tabla de referencias.

use num_bigint::{BigInt, Sign};

use super::protocol::{self, VisitedSet};
use super::registry::HelperRegistry;
use super::table::ReferenceTable;
use crate::model::{ObjectRef, Token, Value};
use crate::options::IdentifyOptions;

pub(crate) struct Normalizer<'a> {
    pub(crate) table: &'a ReferenceTable,
    pub(crate) registry: &'a HelperRegistry,
    pub(crate) options: &'a IdentifyOptions,
}

impl Normalizer<'_> {
    /// Normalización de nivel superior: conjunto de visitados nuevo.
    pub(crate) fn token(&self, value: &Value) -> Token {
        self.normalize(value, &mut VisitedSet::new())
    }

    fn normalize(&self, value: &Value, visited: &mut VisitedSet) -> Token {
        match value {
            Value::Boxed(boxed) => self.normalize(&boxed.value_of(), visited),
            Value::Number(n) => number_token(*n),
            Value::Symbol(s) => Token::new("symbol", s),
            Value::Undefined => Token::new("undefined", "undefined"),
            Value::Null => Token::new("object", "null"),
            Value::Bool(b) => Token::new("boolean", b),
            Value::String(s) => Token::new("string", s),
            Value::BigInt(i) => bigint_token(i),
            Value::Object(object) => self.object_token(value, object, visited),
        }
    }

    fn object_token(&self, value: &Value, object: &ObjectRef, visited: &mut VisitedSet) -> Token {
        if let Some(generator) = self.registry.resolve(value) {
            // los helpers no comparten visitados: se asume que no forman ciclos
            return self.token(&generator(value));
        }
        if self.options.custom_identity {
            if let Some(replacement) = protocol::substitute(object, visited) {
                return self.normalize(&replacement, visited);
            }
        }
        self.table.assign_or_get(object)
    }
}

pub(crate) fn number_token(n: f64) -> Token {
    if n == 0.0 {
        return Token::new("number", if n.is_sign_negative() { "-0" } else { "+0" });
    }
    if n.is_nan() {
        return Token::new("number", "NaN");
    }
    if n.is_infinite() {
        return Token::new("number", if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n < 0.0 {
        Token::new("number", n)
    } else {
        Token::new("number", format_args!("+{n}"))
    }
}

pub(crate) fn bigint_token(i: &BigInt) -> Token {
    match i.sign() {
        Sign::NoSign => Token::new("bigint", "+0"),
        Sign::Minus => Token::new("bigint", i),
        Sign::Plus => Token::new("bigint", format_args!("+{i}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_keeps_its_sign() {
        assert_eq!(number_token(0.0).as_str(), "number:+0");
        assert_eq!(number_token(-0.0).as_str(), "number:-0");
    }

    #[test]
    fn numbers_carry_explicit_sign() {
        assert_eq!(number_token(1.0).as_str(), "number:+1");
        assert_eq!(number_token(-1.0).as_str(), "number:-1");
        assert_eq!(number_token(2.5).as_str(), "number:+2.5");
        assert_eq!(number_token(-0.125).as_str(), "number:-0.125");
    }

    #[test]
    fn nan_and_infinity_are_fixed_literals() {
        assert_eq!(number_token(f64::NAN).as_str(), "number:NaN");
        assert_eq!(number_token(-f64::NAN).as_str(), "number:NaN");
        assert_eq!(number_token(f64::INFINITY).as_str(), "number:Infinity");
        assert_eq!(number_token(f64::NEG_INFINITY).as_str(), "number:-Infinity");
    }

    #[test]
    fn bigint_zero_has_no_sign() {
        assert_eq!(bigint_token(&BigInt::from(0)).as_str(), "bigint:+0");
        assert_eq!(bigint_token(&-BigInt::from(0)).as_str(), "bigint:+0");
        assert_eq!(bigint_token(&BigInt::from(-1)).as_str(), "bigint:-1");
        assert_eq!(bigint_token(&BigInt::from(42)).as_str(), "bigint:+42");
    }

    #[test]
    fn large_bigints_are_exact() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(bigint_token(&big).as_str(), "bigint:+123456789012345678901234567890");
    }
}
