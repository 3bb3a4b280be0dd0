use chrono::NaiveDate;
use ruoyi_company_domain::{CompanyStatus, Query};

/// Typed filters for the company list and export endpoints. Converts into
/// the untyped `Query` the client sends, leaving out every unset field.
#[derive(Debug, Clone, Default)]
pub struct CompanyPageQuery {
    pub name: Option<String>,
    pub city: Option<String>,
    pub status: Option<CompanyStatus>,
    /// Lower bound of the creation date, inclusive
    pub begin_time: Option<NaiveDate>,
    /// Upper bound of the creation date, inclusive
    pub end_time: Option<NaiveDate>,
    pub page_num: Option<u32>,
    pub page_size: Option<u32>,
}

fn format_date(date: &NaiveDate) -> String {
    // 2001-07-08
    date.format("%F").to_string()
}

impl CompanyPageQuery {
    pub fn into_query(self) -> Query {
        let mut query = Query::new();
        if let Some(name) = self.name {
            query.insert("name".into(), name);
        }
        if let Some(city) = self.city {
            query.insert("city".into(), city);
        }
        if let Some(status) = self.status {
            query.insert("status".into(), status.into());
        }
        if let Some(begin_time) = &self.begin_time {
            query.insert("beginTime".into(), format_date(begin_time));
        }
        if let Some(end_time) = &self.end_time {
            query.insert("endTime".into(), format_date(end_time));
        }
        if let Some(page_num) = self.page_num {
            query.insert("pageNum".into(), page_num.to_string());
        }
        if let Some(page_size) = self.page_size {
            query.insert("pageSize".into(), page_size.to_string());
        }
        query
    }
}

impl From<CompanyPageQuery> for Query {
    fn from(query: CompanyPageQuery) -> Self {
        query.into_query()
    }
}
