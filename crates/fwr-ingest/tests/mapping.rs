//! Integration tests for mapping CSV loading.

use std::io::Write;

use fwr_ingest::{IngestError, load_mapping};
use fwr_model::DataType;

fn write_mapping(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write mapping");
    file.flush().expect("flush");
    file
}

#[test]
fn loads_segments_in_file_order() {
    let file = write_mapping(
        "segment_name,column_name,starting,length,datatype\n\
         bio,first_name,0,20,text\n\
         bio,last_name,20,20,text\n\
         address,street,46,30,text\n\
         bio,dob,40,6,date\n",
    );

    let model = load_mapping(file.path()).expect("load mapping");
    let segments: Vec<&str> = model.segments().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(segments, vec!["bio", "address"]);

    let bio = model.segment("bio").expect("bio segment");
    let names: Vec<&str> = bio.field_names().collect();
    assert_eq!(names, vec!["first_name", "last_name", "dob"]);

    let dob = &bio.fields[2];
    assert_eq!((dob.start, dob.end), (40, 46));
    assert_eq!(dob.data_type, DataType::Date);
    assert_eq!(model.line_width(), 76);
}

#[test]
fn unrecognized_datatype_falls_back_to_raw() {
    let file = write_mapping(
        "segment_name,column_name,starting,length,datatype\n\
         bio,blob,0,10,varchar\n",
    );
    let model = load_mapping(file.path()).expect("load mapping");
    assert_eq!(model.segments()[0].fields[0].data_type, DataType::Raw);
}

#[test]
fn tolerates_bom_on_first_header() {
    let file = write_mapping(
        "\u{feff}segment_name,column_name,starting,length,datatype\n\
         bio,first_name,0,20,text\n",
    );
    assert!(load_mapping(file.path()).is_ok());
}

#[test]
fn missing_column_is_rejected() {
    let file = write_mapping(
        "segment_name,column_name,starting,datatype\n\
         bio,first_name,0,text\n",
    );
    let err = load_mapping(file.path()).unwrap_err();
    match err {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "length"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_integer_offset_identifies_row_and_column() {
    let file = write_mapping(
        "segment_name,column_name,starting,length,datatype\n\
         bio,first_name,zero,20,text\n",
    );
    let err = load_mapping(file.path()).unwrap_err();
    match err {
        IngestError::InvalidValue { field, value, row, .. } => {
            assert_eq!(field, "starting");
            assert_eq!(value, "zero");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_length_is_rejected() {
    let file = write_mapping(
        "segment_name,column_name,starting,length,datatype\n\
         bio,first_name,0,0,text\n",
    );
    let err = load_mapping(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::InvalidValue { ref field, .. } if field == "length"));
}

#[test]
fn duplicate_field_in_segment_is_rejected() {
    let file = write_mapping(
        "segment_name,column_name,starting,length,datatype\n\
         bio,dob,40,6,date\n\
         bio,dob,50,6,date\n",
    );
    let err = load_mapping(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Mapping { .. }));
}

#[test]
fn empty_mapping_is_rejected() {
    let file = write_mapping("segment_name,column_name,starting,length,datatype\n");
    let err = load_mapping(file.path()).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Mapping {
            source: fwr_model::ModelError::Empty,
            ..
        }
    ));
}

#[test]
fn missing_file_is_not_found() {
    let err = load_mapping(std::path::Path::new("no-such-mapping.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
