//! CDR loader: the one read-only query behind every report.

use chrono::NaiveDateTime;
use sqlx::MySqlPool;

use crate::models::{CallRecord, Site, Subgroup};

/// Reporting window start. Fixed at deploy time.
pub const REPORT_SINCE: &str = "2025-08-11";

/// Raw row shape of the campaign CDR view.
#[derive(Debug, sqlx::FromRow)]
struct CdrRow {
    call_time: Option<NaiveDateTime>,
    site_id: String,
    site_name: String,
    agent_id: String,
    agent_name: String,
    wait_seconds: i64,
    duration_seconds: i64,
    phone_number: String,
    status: Option<String>,
    deduced_status: Option<String>,
    callback_status: Option<String>,
    callback_date: Option<NaiveDateTime>,
    category: String,
    classification: Option<String>,
    tags: Option<String>,
}

impl From<CdrRow> for CallRecord {
    fn from(row: CdrRow) -> Self {
        let site = Site::parse(&row.category);
        let subgroup = Subgroup::parse(&row.category);
        CallRecord {
            call_time: row.call_time,
            site_id: row.site_id,
            site_name: row.site_name,
            agent_id: row.agent_id,
            agent_name: row.agent_name,
            wait_seconds: row.wait_seconds,
            duration_seconds: row.duration_seconds,
            phone_number: row.phone_number,
            status: row.status,
            deduced_status: row.deduced_status,
            callback_status: row.callback_status,
            callback_date: row.callback_date,
            category: row.category,
            classification: row.classification,
            tags: row.tags,
            site,
            subgroup,
        }
    }
}

/// Load all campaign calls since the given date, normalizing the category
/// into site/subgroup as each row comes in.
pub async fn fetch_since(pool: &MySqlPool, since: &str) -> Result<Vec<CallRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, CdrRow>(
        r#"
        SELECT c.calldate AS call_time,
               CAST(c.nrilha AS CHAR) AS site_id,
               c.nomeilha AS site_name,
               CAST(c.nragente AS CHAR) AS agent_id,
               c.nomeagente AS agent_name,
               c.espera AS wait_seconds,
               c.duracao AS duration_seconds,
               c.numero AS phone_number,
               c.status,
               c.statusdeduzir AS deduced_status,
               c.statusretorno AS callback_status,
               c.dataretorno AS callback_date,
               c.categoria AS category,
               c.subcategorias AS classification,
               c.tags
        FROM n_cdr_ilha_categoria_view c
        WHERE c.calldate >= ?
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(CallRecord::from).collect())
}
