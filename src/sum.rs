//! 加法核心
//!
//! 从三种输入形式中解析出两个操作数：
//! - 查询参数 `a` / `b`
//! - 路径段 `/sum/{a}/{b}`
//! - 表达式字符串 `"a+b"`
//!
//! 这里不涉及 HTTP，错误类型由 server 层转换为响应。

use thiserror::Error;

/// 表达式解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// 按 `+` 拆分后不是恰好两个 token
    #[error("Use format a+b")]
    WrongArity,
    /// token 不是合法的浮点数
    #[error("could not convert string to float: '{0}'")]
    NotANumber(String),
}

/// 求和请求的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    #[error("Invalid expr: {0}")]
    MalformedExpression(#[from] ExprError),
    #[error("Provide a and b or expr")]
    MissingOperands,
    /// 操作数非有限值或求和溢出
    #[error("Sum is not a finite number")]
    NonFinite,
}

/// 操作数对
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

impl Operands {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn sum(&self) -> f64 {
        self.a + self.b
    }

    /// 求和，结果为 `inf` / `NaN` 时返回 [`SumError::NonFinite`]
    pub fn checked_sum(&self) -> Result<f64, SumError> {
        let sum = self.sum();
        if sum.is_finite() {
            Ok(sum)
        } else {
            Err(SumError::NonFinite)
        }
    }
}

/// 解析 `"a+b"` 形式的表达式
///
/// 先去掉所有空白字符，再按 `+` 拆分。拆分结果必须恰好是两个 token，
/// 且每个都能解析为 `f64`。
///
/// # 错误
///
/// - token 数量不是 2 时返回 [`ExprError::WrongArity`]
/// - 任一 token 不是数字时返回 [`ExprError::NotANumber`]
pub fn parse_expression(expr: &str) -> Result<Operands, ExprError> {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    let tokens: Vec<&str> = compact.split('+').collect();

    let [a, b] = tokens.as_slice() else {
        return Err(ExprError::WrongArity);
    };

    Ok(Operands::new(parse_operand(a)?, parse_operand(b)?))
}

fn parse_operand(token: &str) -> Result<f64, ExprError> {
    token
        .parse()
        .map_err(|_| ExprError::NotANumber(token.to_string()))
}

/// 从查询参数中解析操作数
///
/// 非空的 `expr` 优先于 `a` / `b`；空字符串视为未提供，回退到 `a` / `b`。
pub fn resolve(a: Option<f64>, b: Option<f64>, expr: Option<&str>) -> Result<Operands, SumError> {
    if let Some(expr) = expr.filter(|e| !e.is_empty()) {
        return Ok(parse_expression(expr)?);
    }

    match (a, b) {
        (Some(a), Some(b)) => Ok(Operands::new(a, b)),
        _ => Err(SumError::MissingOperands),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_expression() {
        let ops = parse_expression("10+15").unwrap();
        assert_eq!(ops, Operands::new(10.0, 15.0));
        assert_eq!(ops.sum(), 25.0);
    }

    #[test]
    fn strips_whitespace_before_splitting() {
        let ops = parse_expression("  1.5 +\t2.25 ").unwrap();
        assert_eq!(ops.sum(), 3.75);

        let ops = parse_expression("1 0+2").unwrap();
        assert_eq!(ops, Operands::new(10.0, 2.0));
    }

    #[test]
    fn accepts_negative_and_exponent_operands() {
        let ops = parse_expression("-4+1e2").unwrap();
        assert_eq!(ops.sum(), 96.0);
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(parse_expression("1+2+3"), Err(ExprError::WrongArity));
        assert_eq!(parse_expression("12"), Err(ExprError::WrongArity));
        assert_eq!(parse_expression("   "), Err(ExprError::WrongArity));
    }

    #[test]
    fn stray_plus_in_operand_is_misplit() {
        // "1e+5" 中的 "+" 也会被拆分，得到三个 token
        assert_eq!(parse_expression("1e+5+1"), Err(ExprError::WrongArity));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_expression("abc+2").unwrap_err();
        assert_eq!(err, ExprError::NotANumber("abc".to_string()));
        assert_eq!(err.to_string(), "could not convert string to float: 'abc'");

        assert_eq!(
            parse_expression("+2"),
            Err(ExprError::NotANumber(String::new()))
        );
    }

    #[test]
    fn expr_takes_precedence_over_operands() {
        let ops = resolve(Some(100.0), Some(200.0), Some("1+2")).unwrap();
        assert_eq!(ops.sum(), 3.0);
    }

    #[test]
    fn empty_expr_falls_back_to_operands() {
        let ops = resolve(Some(2.0), Some(3.0), Some("")).unwrap();
        assert_eq!(ops.sum(), 5.0);
    }

    #[test]
    fn missing_operands() {
        assert_eq!(resolve(None, None, None), Err(SumError::MissingOperands));
        assert_eq!(resolve(Some(1.0), None, None), Err(SumError::MissingOperands));
        assert_eq!(resolve(None, Some(1.0), Some("")), Err(SumError::MissingOperands));
        assert_eq!(
            SumError::MissingOperands.to_string(),
            "Provide a and b or expr"
        );
    }

    #[test]
    fn non_finite_sum_is_rejected() {
        assert_eq!(Operands::new(1e308, 1e308).checked_sum(), Err(SumError::NonFinite));
        assert_eq!(Operands::new(f64::NAN, 1.0).checked_sum(), Err(SumError::NonFinite));
        assert_eq!(
            parse_expression("inf+1").unwrap().checked_sum(),
            Err(SumError::NonFinite)
        );
        assert_eq!(Operands::new(-1e308, 1e308).checked_sum(), Ok(0.0));
    }

    #[test]
    fn malformed_expression_message() {
        let err = resolve(Some(1.0), Some(2.0), Some("1+2+3")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid expr: Use format a+b");
    }
}
