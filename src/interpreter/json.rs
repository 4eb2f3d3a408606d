use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::interpreter::expr::{Expression, Keyword};

impl Serialize for Expression {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Expression::Number(n) => serializer.serialize_i64(*n),
            Expression::StringLiteral(text) => serializer.serialize_str(text),
            Expression::Identifier(name) => serializer.serialize_str(name),
            Expression::Form { head, operands } => {
                let mut seq = serializer.serialize_seq(Some(operands.len() + 1))?;
                seq.serialize_element(head)?;
                for operand in operands {
                    seq.serialize_element(operand)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExpressionVisitor;

        impl<'de> Visitor<'de> for ExpressionVisitor {
            type Value = Expression;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer, a string token, or a keyword-headed sequence")
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Expression, E> { Ok(Expression::Number(n)) }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Expression, E> {
                i64::try_from(n).map(Expression::Number).map_err(|_| E::custom(format!("integer out of range: {}", n)))
            }

            // A bare token is either a quoted string literal or an identifier.
            fn visit_str<E: de::Error>(self, token: &str) -> Result<Expression, E> {
                Expression::atom(token).map_err(E::custom)
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Expression, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let head: Keyword = seq.next_element()?.ok_or_else(|| de::Error::custom("empty form"))?;
                let mut operands = Vec::new();
                while let Some(operand) = seq.next_element()? {
                    operands.push(operand);
                }
                Ok(Expression::Form { head, operands })
            }
        }

        deserializer.deserialize_any(ExpressionVisitor)
    }
}

pub fn serialize_expression(expression: &Expression) -> Result<String, serde_json::Error> {
    serde_json::to_string(expression)
}

pub fn deserialize_expression(json: &str) -> Result<Expression, serde_json::Error> { serde_json::from_str(json) }

#[cfg(test)]
mod test_expression_interchange {
    use super::*;

    #[test]
    fn test_form_deserialization() {
        let expression = deserialize_expression(r#"["+", 3, ["*", 2, 4]]"#).unwrap();
        assert_eq!(
            expression,
            Expression::Form {
                head: Keyword::Add,
                operands: vec![
                    Expression::Number(3),
                    Expression::Form {
                        head: Keyword::Multiply,
                        operands: vec![Expression::Number(2), Expression::Number(4)],
                    },
                ],
            }
        );
        assert_eq!(format!("{}", expression), "(+ 3 (* 2 4))");
    }

    #[test]
    fn test_token_classification() {
        assert_eq!(deserialize_expression(r#""x1_y""#).unwrap(), Expression::Identifier("x1_y".to_string()));
        assert_eq!(
            deserialize_expression(r#""\"hello\"""#).unwrap(),
            Expression::StringLiteral("\"hello\"".to_string())
        );
        // `let` is a reserved word, not an identifier.
        assert!(deserialize_expression(r#""let""#).is_err());
        assert!(deserialize_expression(r#""9lives""#).is_err());
    }

    #[test]
    fn test_unknown_head_is_rejected() {
        assert!(deserialize_expression(r#"["frobnicate", 1, 2]"#).is_err());
        assert!(deserialize_expression(r#"[]"#).is_err());
    }

    #[test]
    fn test_serialization_round_trip() {
        let json = r#"["begin",["let","x",10],["set","x",["+","x",1]],"x"]"#;
        let expression = deserialize_expression(json).unwrap();
        assert_eq!(serialize_expression(&expression).unwrap(), json);
    }
}
