//! Integration tests for loading local CSV tables.

use std::io::Write;

use tempfile::NamedTempFile;

use dinemap_ingest::{DataSource, DatasetSources, IngestError, load_tables};

const BUSINESSES: &str = "\
business_id,name,address,postal_code,categories_grouped,stars,latitude,longitude
b1,Trattoria Uno,1 State St,93101,Italian,4.0,34.42,-119.70
b1,Trattoria Uno,dup,93101,Italian,4.0,34.42,-119.70
b2,Taqueria Dos,2 Milpas St,93103,,3.5,34.43,-119.68
";

const REVIEWS: &str = "\
business_id,text,stars,funny,useful,cool
b1,\"Great pasta, friendly staff\",5,0,3,1
b1,Slow service,2,1,,0
b2,Best tacos in town,4.0,0,1,2
";

fn temp_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{contents}").expect("write csv");
    file
}

fn sources(businesses: &NamedTempFile, reviews: &NamedTempFile) -> DatasetSources {
    DatasetSources {
        businesses: DataSource::Path(businesses.path().to_path_buf()),
        reviews: DataSource::Path(reviews.path().to_path_buf()),
    }
}

#[test]
fn loads_both_tables_in_row_order() {
    let businesses = temp_csv(BUSINESSES);
    let reviews = temp_csv(REVIEWS);
    let tables = load_tables(&sources(&businesses, &reviews)).expect("load tables");

    assert_eq!(tables.businesses.len(), 3, "duplicates are kept until dedupe");
    assert_eq!(tables.businesses[0].business_id, "b1");
    assert_eq!(tables.businesses[1].address, "dup");
    assert_eq!(tables.businesses[0].postal_code, "93101");
    assert!((tables.businesses[0].latitude - 34.42).abs() < 1e-9);

    assert_eq!(tables.reviews.len(), 3);
    assert_eq!(tables.reviews[0].text, "Great pasta, friendly staff");
    assert_eq!(tables.reviews[0].useful, 3);
    assert_eq!(tables.reviews[1].useful, 0, "blank count reads as zero");
    assert!((tables.reviews[2].stars - 4.0).abs() < 1e-9);
}

#[test]
fn blank_category_becomes_other() {
    let businesses = temp_csv(BUSINESSES);
    let reviews = temp_csv(REVIEWS);
    let tables = load_tables(&sources(&businesses, &reviews)).expect("load tables");
    assert_eq!(tables.businesses[2].categories_grouped, "Other");
}

#[test]
fn missing_column_is_fatal() {
    let businesses = temp_csv("business_id,name,stars\nb1,Uno,4\n");
    let reviews = temp_csv(REVIEWS);
    let err = load_tables(&sources(&businesses, &reviews)).expect_err("missing columns");
    assert!(matches!(err, IngestError::MissingColumn { column, .. } if column == "address"));
}

#[test]
fn non_numeric_coordinate_is_fatal() {
    let businesses = temp_csv(
        "business_id,name,address,postal_code,categories_grouped,stars,latitude,longitude\n\
         b1,Uno,1 State St,93101,Italian,4.0,north,-119.70\n",
    );
    let reviews = temp_csv(REVIEWS);
    let err = load_tables(&sources(&businesses, &reviews)).expect_err("bad latitude");
    match err {
        IngestError::InvalidValue {
            column, value, row, ..
        } => {
            assert_eq!(column, "latitude");
            assert_eq!(value, "north");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn blank_business_id_is_fatal() {
    let businesses = temp_csv(BUSINESSES);
    let reviews = temp_csv("business_id,text,stars,funny,useful,cool\n,orphan,3,0,0,0\n");
    let err = load_tables(&sources(&businesses, &reviews)).expect_err("blank id");
    assert!(matches!(err, IngestError::MissingValue { column, row: 1, .. } if column == "business_id"));
}

#[test]
fn negative_vote_count_is_invalid() {
    let businesses = temp_csv(BUSINESSES);
    let reviews = temp_csv("business_id,text,stars,funny,useful,cool\nb1,meh,3,-2,0,0\n");
    let err = load_tables(&sources(&businesses, &reviews)).expect_err("negative count");
    assert!(matches!(err, IngestError::InvalidValue { column, .. } if column == "funny"));
}

#[test]
fn header_only_reviews_load_as_empty() {
    let businesses = temp_csv(BUSINESSES);
    let reviews = temp_csv("business_id,text,stars,funny,useful,cool\n");
    let tables = load_tables(&sources(&businesses, &reviews)).expect("load tables");
    assert_eq!(tables.businesses.len(), 3);
    assert!(tables.reviews.is_empty());
}
