use teamscout::ScoutError;
use teamscout::requirements::{Budget, Domain, LocationPreference, RequirementExtractor, Urgency};
use teamscout::test_utils::{TestCase, run_table_tests};

type Classification = (usize, Domain, Urgency, Budget, LocationPreference);

#[test]
fn classification_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "turkish_urgent_remote_low_budget",
            input: "Acil! 5 kişilik ekip ile web uygulaması, düşük bütçe, uzaktan",
            expected: (
                5,
                Domain::Technology,
                Urgency::High,
                Budget::Low,
                LocationPreference::Remote,
            ),
            should_panic: false,
        },
        TestCase {
            name: "english_team_of_onsite",
            input: "Need a team of 4 for a marketing campaign, no rush, on-site in Izmir",
            expected: (
                4,
                Domain::Marketing,
                Urgency::Low,
                Budget::Medium,
                LocationPreference::Local,
            ),
            should_panic: false,
        },
        TestCase {
            name: "empty_description_defaults",
            input: "",
            expected: (
                3,
                Domain::General,
                Urgency::Medium,
                Budget::Medium,
                LocationPreference::Hybrid,
            ),
            should_panic: false,
        },
        TestCase {
            name: "oversized_team_is_clamped",
            input: "Looking for 40 engineers for a hybrid fintech platform",
            expected: (
                12,
                Domain::Finance,
                Urgency::Medium,
                Budget::Medium,
                LocationPreference::Hybrid,
            ),
            should_panic: false,
        },
    ];

    let extractor = RequirementExtractor::default();
    run_table_tests(cases, |description| {
        let requirement = extractor
            .extract(description, None)
            .expect("extraction without explicit size never fails");
        (
            requirement.team_size,
            requirement.domain,
            requirement.urgency,
            requirement.budget,
            requirement.location,
        )
    })
}

#[test]
fn explicit_team_size_overrides_text() {
    let extractor = RequirementExtractor::default();
    let requirement = extractor.extract("5 kişilik ekip", Some(7)).unwrap();
    assert_eq!(requirement.team_size, 7);
    let requirement = extractor.extract("5 kişilik ekip", Some(100)).unwrap();
    assert_eq!(requirement.team_size, 12);
}

#[test]
fn non_positive_team_size_is_rejected() {
    let extractor = RequirementExtractor::default();
    for size in [0, -2] {
        let err = extractor.extract("web app", Some(size)).unwrap_err();
        assert!(matches!(err, ScoutError::InvalidRequirement(_)), "size {size}");
    }
}

#[test]
fn mobile_project_roles_skills_and_languages() {
    let requirement = RequirementExtractor::default()
        .extract("React ile mobil uygulama, 3 kişilik, İngilizce bilen", None)
        .unwrap();
    assert_eq!(
        requirement.roles,
        vec!["Mobile Developer", "Backend Developer", "Project Manager"]
    );
    assert_eq!(requirement.skills, vec!["react"]);
    assert_eq!(requirement.languages, vec!["English"]);
    assert_eq!(requirement.domain, Domain::Technology);
}

#[test]
fn domain_aliases_parse() {
    assert_eq!("teknoloji".parse::<Domain>().unwrap(), Domain::Technology);
    assert_eq!("Real Estate".parse::<Domain>().unwrap(), Domain::RealEstate);
    assert_eq!("İnsan Kaynakları".parse::<Domain>().unwrap(), Domain::HumanResources);
    assert!("astrology".parse::<Domain>().is_err());
}
