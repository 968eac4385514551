use gradehub_core::{
    Grade, HubService, HubServiceError, ResultInput, SectionInput, SequentialIds, StoreError,
    StudentInput, ValidationError,
};
use uuid::Uuid;

fn service() -> HubService<SequentialIds> {
    HubService::with_ids(SequentialIds::new())
}

fn ann_input() -> StudentInput {
    StudentInput {
        name: "Ann".to_string(),
        email: "ann@example.com".to_string(),
        section_id: None,
        enrollment_date: Some("2024-01-15".to_string()),
    }
}

#[test]
fn add_update_delete_through_the_service() {
    let mut service = service();

    let section = service
        .add_section(SectionInput {
            name: "Section A".to_string(),
            description: None,
        })
        .unwrap();

    let mut input = ann_input();
    input.section_id = Some(section.id);
    let ann = service.add_student(input).unwrap();
    assert_eq!(service.students().len(), 1);
    assert_eq!(ann.section_id, Some(section.id));

    let mut renamed = ann_input();
    renamed.name = "Ann Smith".to_string();
    let updated = service.update_student(ann.id, renamed).unwrap();
    assert_eq!(updated.id, ann.id);
    assert_eq!(updated.name, "Ann Smith");

    service.delete_student(ann.id).unwrap();
    assert!(service.students().is_empty());
}

#[test]
fn invalid_input_never_touches_the_store() {
    let mut service = service();

    let err = service
        .add_student(StudentInput {
            name: "Ann".to_string(),
            email: "not-an-email".to_string(),
            section_id: None,
            enrollment_date: None,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        HubServiceError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert!(service.students().is_empty());

    let err = service
        .add_result(ResultInput {
            student_id: Some(Uuid::from_u128(1)),
            subject: "Mathematics".to_string(),
            marks: 120,
            exam_date: None,
        })
        .unwrap_err();

    assert!(matches!(
        err,
        HubServiceError::Validation(ValidationError::MarksOutOfRange(120))
    ));
    assert!(service.results().is_empty());
}

#[test]
fn store_errors_surface_through_the_service() {
    let mut service = service();
    let missing = Uuid::from_u128(0xdead_beef);

    let err = service.update_section(
        missing,
        SectionInput {
            name: "Section A".to_string(),
            description: None,
        },
    );

    assert!(matches!(
        err,
        Err(HubServiceError::Store(StoreError::NotFound { .. }))
    ));

    let err = service.delete_result(missing);
    assert!(matches!(
        err,
        Err(HubServiceError::Store(StoreError::NotFound { .. }))
    ));
}

#[test]
fn section_deletion_repairs_students_via_service() {
    let mut service = service();

    let section = service
        .add_section(SectionInput {
            name: "Section A".to_string(),
            description: None,
        })
        .unwrap();
    let mut input = ann_input();
    input.section_id = Some(section.id);
    let ann = service.add_student(input).unwrap();

    service.delete_section(section.id).unwrap();

    assert_eq!(service.students().len(), 1);
    assert_eq!(service.store().get_student(ann.id).unwrap().section_id, None);
}

#[test]
fn grade_of_classifies_result_marks() {
    let mut service = service();
    let ann = service.add_student(ann_input()).unwrap();
    let result = service
        .add_result(ResultInput {
            student_id: Some(ann.id),
            subject: "Mathematics".to_string(),
            marks: 95,
            exam_date: Some("2024-03-15".to_string()),
        })
        .unwrap();

    assert_eq!(service.grade_of(&result), Grade::APlus);
}
