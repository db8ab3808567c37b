//! 求和处理器

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::sum::{self, Operands};

/// `GET /sum` 的查询参数
#[derive(Debug, Default, Serialize)]
pub struct SumQuery {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub expr: Option<String>,
}

impl SumQuery {
    /// 从查询键值对构建
    ///
    /// 重复的键以最后一次出现为准，未知的键忽略。
    /// 只校验最终生效的 `a` / `b`。
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut raw_a = None;
        let mut raw_b = None;
        let mut expr = None;

        for (key, value) in pairs {
            match key.as_str() {
                "a" => raw_a = Some(value),
                "b" => raw_b = Some(value),
                "expr" => expr = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            a: raw_a.map(|v| parse_query_float("a", &v)).transpose()?,
            b: raw_b.map(|v| parse_query_float("b", &v)).transpose()?,
            expr,
        })
    }
}

fn parse_query_float(name: &str, value: &str) -> Result<f64, ApiError> {
    value.parse().map_err(|_| {
        ApiError::Unprocessable(format!(
            "Query parameter `{}`: '{}' is not a valid number",
            name, value
        ))
    })
}

/// 求和结果
#[derive(Debug, Serialize, Deserialize)]
pub struct SumResponse {
    pub sum: f64,
}

impl TryFrom<Operands> for SumResponse {
    type Error = ApiError;

    fn try_from(operands: Operands) -> Result<Self, Self::Error> {
        Ok(Self {
            sum: operands.checked_sum()?,
        })
    }
}

/// GET /sum?a=&b=&expr=
pub async fn handle_sum_query(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SumResponse>, ApiError> {
    let Query(pairs) = query?;
    let query = SumQuery::from_pairs(pairs)?;
    let operands = sum::resolve(query.a, query.b, query.expr.as_deref())?;
    Ok(Json(SumResponse::try_from(operands)?))
}

/// GET /sum/{a}/{b}
pub async fn handle_sum_path(
    path: Result<Path<(f64, f64)>, PathRejection>,
) -> Result<Json<SumResponse>, ApiError> {
    let Path((a, b)) = path?;
    Ok(Json(SumResponse::try_from(Operands::new(a, b))?))
}
