//! Services behind the table screens: page, stats and CSV export.

use chrono::NaiveDate;
use validator::Validate;

use crate::backend::Backend;
use crate::domain::record::Record;
use crate::domain::screen::Screen;
use crate::dto::screens::{ScreenExport, ScreenPageData, ScreenStatsData};
use crate::export;
use crate::forms::FormError;
use crate::forms::list::ListQueryForm;
use crate::pagination::Paginated;
use crate::query;
use crate::services::{ServiceError, ServiceResult};

fn validate_form(form: &ListQueryForm) -> ServiceResult<()> {
    form.validate().map_err(|err| {
        let err = FormError::from(err);
        log::error!("Failed to validate list parameters: {err}");
        ServiceError::from(err)
    })
}

async fn fetch_records(backend: &Backend, screen: Screen) -> ServiceResult<Vec<Record>> {
    backend.fetch_collection(screen).await.map_err(|err| {
        log::error!("Failed to fetch {screen} collection: {err}");
        ServiceError::from(err)
    })
}

/// Runs the screen's query over an already loaded collection.
pub fn build_screen_page(
    screen: Screen,
    records: &[Record],
    form: &ListQueryForm,
    default_page_size: usize,
) -> ScreenPageData {
    let spec = screen.spec();
    let list_query = form.to_list_query(spec, default_page_size);

    let result = query::run(records, &list_query, spec.searchable_fields).cloned();
    let stats = query::count_by_field(records, spec.stats_field);
    let filters = list_query
        .active_filters()
        .map(|(field, value)| (field.to_string(), value.to_string()))
        .collect();

    ScreenPageData {
        screen,
        title: spec.title,
        records: Paginated::new(result, list_query.page),
        search_query: form.search_term(),
        filters,
        stats,
    }
}

/// Counts over the unfiltered collection.
pub fn build_screen_stats(screen: Screen, records: &[Record]) -> ScreenStatsData {
    let spec = screen.spec();

    ScreenStatsData {
        screen,
        field: spec.stats_field,
        total: records.len(),
        counts: query::count_by_field(records, spec.stats_field),
    }
}

/// Serializes every record matching the form's search and filters.
pub fn build_screen_export(
    screen: Screen,
    records: &[Record],
    form: &ListQueryForm,
    date: NaiveDate,
) -> ServiceResult<ScreenExport> {
    let spec = screen.spec();
    let list_query = form.to_list_query(spec, 1);
    let matched = query::matching(records, &list_query, spec.searchable_fields);

    let body = export::to_csv(&matched, spec.export_columns).map_err(|err| {
        log::error!("Failed to export {screen}: {err}");
        err
    })?;

    Ok(ScreenExport {
        filename: export::export_filename(spec.slug, date),
        body,
        rows: matched.len(),
    })
}

/// Loads the page of `screen` requested by `form`.
pub async fn load_screen_page(
    backend: &Backend,
    screen: Screen,
    form: ListQueryForm,
    default_page_size: usize,
) -> ServiceResult<ScreenPageData> {
    validate_form(&form)?;

    let records = fetch_records(backend, screen).await?;

    Ok(build_screen_page(screen, &records, &form, default_page_size))
}

/// Loads the stats cards of `screen`.
pub async fn load_screen_stats(backend: &Backend, screen: Screen) -> ServiceResult<ScreenStatsData> {
    let records = fetch_records(backend, screen).await?;

    Ok(build_screen_stats(screen, &records))
}

/// Exports the matching records of `screen` as CSV dated `date`.
pub async fn export_screen(
    backend: &Backend,
    screen: Screen,
    form: ListQueryForm,
    date: NaiveDate,
) -> ServiceResult<ScreenExport> {
    validate_form(&form)?;

    let records = fetch_records(backend, screen).await?;
    let export = build_screen_export(screen, &records, &form, date)?;
    log::info!("Exported {} {screen} rows", export.rows);

    Ok(export)
}
