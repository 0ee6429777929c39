//! Schema adapter behaviour against realistic form schemas

use chrono::{DateTime, Utc};
use courier_core::RequestEvent;
use courier_schema::rules::{
	ObjectSchema, RuleExt, UnionRule, any, array, boolean, date, enumeration, number, object,
	string, union,
};
use courier_schema::{
	DataValidator, Issue, MaybeAsync, Outcome, PathSegment, StandardSchema, ValidationResult,
	ValidatorErrors, schema,
};
use regex::Regex;
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

#[fixture]
fn event() -> RequestEvent {
	RequestEvent::synthetic()
}

/// Account schema with a uuid id, constrained credentials and defaults.
#[fixture]
fn account() -> ObjectSchema {
	object()
		.field("id", string().uuid())
		.field("username", string().min(4))
		.field(
			"password",
			string().min(8).regex(Regex::new(r"^[a-zA-Z]+$").unwrap()),
		)
		.field("verified", boolean().default_value(false))
		.field("createdAt", date().coerce().default_now())
		.field(
			"role",
			enumeration(["user", "moderator", "admin"]).default_value("user"),
		)
}

fn now_millis() -> DateTime<Utc> {
	DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap()
}

fn field_errors(result: &ValidationResult<Value>) -> Value {
	serde_json::to_value(&result.error().unwrap().field_errors).unwrap()
}

#[rstest]
#[tokio::test]
async fn test_missing_required_fields(event: RequestEvent) {
	// Arrange
	let login = schema(
		object()
			.field("username", string())
			.field("password", string()),
	);

	// Act
	let result = login.validate(&event, json!({})).await;

	// Assert
	assert_eq!(
		serde_json::to_value(&result).unwrap(),
		json!({
			"success": false,
			"status": 400,
			"error": {
				"formErrors": [],
				"fieldErrors": {
					"username": ["Required"],
					"password": ["Required"]
				}
			}
		})
	);
}

#[rstest]
#[case(json!({"arrayWithStrings": ["a", 2, "c"]}), vec!["Expected string, received number"])]
#[case(json!({"arrayWithStrings": [null, 1]}), vec![
	"Expected string, received null",
	"Expected string, received number",
])]
#[case(json!({}), vec!["Required"])]
#[case(json!({"arrayWithStrings": "a"}), vec!["Expected array, received string"])]
#[tokio::test]
async fn test_array_issues_share_collapsed_key(
	event: RequestEvent,
	#[case] input: Value,
	#[case] messages: Vec<&str>,
) {
	let validator = schema(object().field("arrayWithStrings", array(string())));

	let result = validator.validate(&event, input).await;

	assert_eq!(
		field_errors(&result),
		json!({ "arrayWithStrings[]": messages })
	);
}

#[rstest]
#[tokio::test]
async fn test_array_of_objects_keys(event: RequestEvent) {
	// Arrange
	let people = object().field(
		"persons",
		array(object().field("name", string()).field("age", number())),
	);
	let registry = people.field_keys();
	let validator = schema(people);

	// Act
	let result = validator
		.validate(
			&event,
			json!({"persons": [{"name": "Ada", "age": 36}, {"age": "old"}, 7]}),
		)
		.await;

	// Assert
	assert_eq!(registry, ["persons[]", "persons[].name", "persons[].age"]);
	assert_eq!(
		field_errors(&result),
		json!({
			"persons[].name": ["Required"],
			"persons[].age": ["Expected number, received string"],
			"persons[]": ["Expected object, received number"]
		})
	);
}

#[rstest]
#[tokio::test]
async fn test_valid_account_keeps_coercions_and_defaults(event: RequestEvent, account: ObjectSchema) {
	// Arrange
	let created_at = now_millis();
	let input = json!({
		"id": "9ff695ee-6604-4db5-af25-98a6ac682705",
		"username": "test",
		"password": "testpassword",
		"role": "moderator",
		"createdAt": created_at.to_rfc3339(),
	});

	// Act
	let result = schema(account).validate(&event, input).await;

	// Assert
	assert_eq!(
		serde_json::to_value(&result).unwrap(),
		json!({
			"success": true,
			"data": {
				"id": "9ff695ee-6604-4db5-af25-98a6ac682705",
				"username": "test",
				"password": "testpassword",
				"verified": false,
				"createdAt": created_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
				"role": "moderator"
			}
		})
	);
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Account {
	id: String,
	username: String,
	password: String,
	verified: bool,
	created_at: DateTime<Utc>,
	role: String,
}

#[rstest]
#[tokio::test]
async fn test_typed_account_output(event: RequestEvent, account: ObjectSchema) {
	// Arrange
	let created_at = now_millis();
	let validator = schema(account.typed::<Account>());

	// Act
	let result = validator
		.validate(
			&event,
			json!({
				"id": "9ff695ee-6604-4db5-af25-98a6ac682705",
				"username": "test",
				"password": "testpassword",
				"role": "moderator",
				"createdAt": created_at.to_rfc3339(),
			}),
		)
		.await;

	// Assert
	assert_eq!(
		result,
		ValidationResult::Success {
			data: Account {
				id: "9ff695ee-6604-4db5-af25-98a6ac682705".into(),
				username: "test".into(),
				password: "testpassword".into(),
				verified: false,
				created_at,
				role: "moderator".into(),
			}
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_default_timestamp_is_injected(event: RequestEvent, account: ObjectSchema) {
	let before = now_millis();

	let result = schema(account.typed::<Account>())
		.validate(
			&event,
			json!({
				"id": "9ff695ee-6604-4db5-af25-98a6ac682705",
				"username": "test",
				"password": "testpassword",
			}),
		)
		.await;

	let data = result.into_result().unwrap();
	assert!(data.created_at >= before);
	assert_eq!(data.role, "user");
}

#[rstest]
#[tokio::test]
async fn test_invalid_account_reports_every_field(event: RequestEvent, account: ObjectSchema) {
	// Arrange
	let input = json!({
		"id": "invalid-uuid",
		"password": "short1",
		"role": "missing-role",
		"date": "Invalid date",
	});

	// Act
	let result = schema(account).validate(&event, input).await;

	// Assert
	let mut expected = ValidatorErrors::default();
	expected
		.field_errors
		.insert("id".into(), vec!["Invalid uuid".into()]);
	expected.field_errors.insert(
		"password".into(),
		vec![
			"String must contain at least 8 character(s)".into(),
			"Invalid".into(),
		],
	);
	expected
		.field_errors
		.insert("username".into(), vec!["Required".into()]);
	expected.field_errors.insert(
		"role".into(),
		vec![
			"Invalid enum value. Expected 'user' | 'moderator' | 'admin', received 'missing-role'"
				.into(),
		],
	);
	assert_eq!(
		result,
		ValidationResult::Failure {
			status: 400,
			error: expected
		}
	);
}

#[rstest]
#[tokio::test]
async fn test_validation_is_repeatable(event: RequestEvent, account: ObjectSchema) {
	let validator = schema(account);
	let input = json!({"id": "invalid-uuid", "password": "short1"});

	let first = validator.validate(&event, input.clone()).await;
	let second = validator.validate(&event, input).await;

	assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn test_refinement_reports_form_error(event: RequestEvent) {
	// Arrange
	let admin = object()
		.field("roles", array(enumeration(["user", "admin", "moderator"])).default_value(vec!["user"]))
		.field("permissions", array(string()))
		.refine(
			|data| {
				data["roles"]
					.as_array()
					.is_some_and(|roles| roles.iter().any(|role| role == "admin"))
			},
			"Admin role must be included in roles",
		);

	// Act
	let result = schema(admin)
		.validate(&event, json!({"permissions": ["delete"]}))
		.await;

	// Assert
	let error = result.error().unwrap();
	assert_eq!(error.form_errors, vec!["Admin role must be included in roles"]);
	assert!(error.field_errors.is_empty());
}

#[rstest]
#[tokio::test]
async fn test_runtime_keys_stay_inside_registry(event: RequestEvent) {
	// Arrange
	let user = object()
		.field("id", string().uuid())
		.field("username", string().min(3).max(20))
		.field("email", string().email())
		.field("createdAt", date().default_now())
		.field("isActive", boolean().default_value(true))
		.field("someAnyType", any())
		.field("roles", array(enumeration(["user", "admin", "moderator"])).default_value(vec!["user"]))
		.field(
			"preferences",
			object()
				.field("theme", enumeration(["light", "dark"]).default_value("light"))
				.field("notifications", boolean().default_value(true))
				.optional(),
		)
		.field("matrix", array(array(number())).optional());
	let registry = user.field_keys();
	let validator = schema(user);

	// Act
	let result = validator
		.validate(
			&event,
			json!({
				"id": 1,
				"username": "ab",
				"email": "nobody",
				"createdAt": "yesterday",
				"isActive": "yes",
				"someAnyType": {"anything": true},
				"roles": ["root"],
				"preferences": {"theme": "blue", "notifications": 1},
				"matrix": [[1, "2"], "3"]
			}),
		)
		.await;

	// Assert
	let error = result.error().unwrap();
	assert!(!error.field_errors.contains_key("someAnyType"));
	for key in error.field_errors.keys() {
		assert!(registry.contains(key), "{} missing from {:?}", key, registry);
	}
	assert_eq!(error.field("matrix[][]").len(), 2);
	assert_eq!(error.field("preferences.theme").len(), 1);
	assert_eq!(error.field_errors.len(), 9);
}

/// Answers after a suspension point, like a schema checking a database.
struct ReservedUsernames;

impl StandardSchema for ReservedUsernames {
	type Output = String;

	fn validate<'a>(&'a self, input: &'a Value) -> MaybeAsync<'a, Outcome<String>> {
		MaybeAsync::Pending(Box::pin(async move {
			tokio::task::yield_now().await;
			match input["username"].as_str() {
				Some("admin") => Outcome::Failure(vec![
					Issue::new("Username is taken").at([PathSegment::from("username")]),
				]),
				Some(name) => Outcome::Success(name.to_string()),
				None => Outcome::Failure(vec![Issue::new("Username is required")]),
			}
		}))
	}
}

#[rstest]
#[case(json!({"username": "ada"}), ValidationResult::success("ada".to_string()))]
#[case(json!({"username": "admin"}), ValidationResult::failure(ValidatorErrors {
	form_errors: vec![],
	field_errors: [("username".to_string(), vec!["Username is taken".to_string()])].into_iter().collect(),
}))]
#[case(json!({}), ValidationResult::failure(ValidatorErrors {
	form_errors: vec!["Username is required".to_string()],
	..Default::default()
}))]
#[tokio::test]
async fn test_pending_schema_is_awaited(
	event: RequestEvent,
	#[case] input: Value,
	#[case] expected: ValidationResult<String>,
) {
	let result = schema(ReservedUsernames).validate(&event, input).await;

	assert_eq!(result, expected);
}

fn base_user() -> ObjectSchema {
	object()
		.field("id", string().uuid())
		.field("username", string().min(3).max(20))
		.field("email", string().email())
		.field("createdAt", date().default_now())
		.field("isActive", boolean().default_value(true))
		.field("someAnyType", any())
		.field("roles", array(enumeration(["user", "admin", "moderator"])).default_value(vec!["user"]))
		.field(
			"preferences",
			object()
				.field("theme", enumeration(["light", "dark"]).default_value("light"))
				.field("notifications", boolean().default_value(true))
				.optional(),
		)
}

fn has_role(data: &serde_json::Map<String, Value>, role: &str) -> bool {
	data["roles"]
		.as_array()
		.is_some_and(|roles| roles.iter().any(|r| r == role))
}

/// Admin, moderator and plain users, tried in that order.
#[fixture]
fn user_kinds() -> UnionRule {
	let admin = base_user()
		.extend(
			object()
				.field("adminSince", date())
				.field("permissions", array(string())),
		)
		.refine(|data| has_role(data, "admin"), "Admin role must be included in roles");
	let moderator = base_user()
		.extend(object().field("moderatedSections", array(string())))
		.refine(
			|data| has_role(data, "moderator"),
			"Moderator role must be included in roles",
		);

	union([admin.boxed(), moderator.boxed(), base_user().boxed()])
}

#[rstest]
fn test_union_keys_cover_every_member(user_kinds: UnionRule) {
	let keys = user_kinds.field_keys();

	assert_eq!(
		keys,
		[
			"id",
			"username",
			"email",
			"createdAt",
			"isActive",
			"roles[]",
			"preferences",
			"preferences.theme",
			"preferences.notifications",
			"adminSince",
			"permissions[]",
			"moderatedSections[]",
		]
	);
	assert!(!keys.iter().any(|key| key == "someAnyType"));
}

#[rstest]
#[case(
	json!({"roles": ["admin"], "adminSince": "2024-01-01T00:00:00Z", "permissions": ["ban"]}),
	Some("permissions")
)]
#[case(json!({"roles": ["moderator"], "moderatedSections": ["news"]}), Some("moderatedSections"))]
#[case(json!({"roles": ["user"], "permissions": ["ban"]}), None)]
#[tokio::test]
async fn test_union_picks_first_matching_kind(
	event: RequestEvent,
	user_kinds: UnionRule,
	#[case] extra: Value,
	#[case] kept: Option<&str>,
) {
	// Arrange
	let mut input = json!({
		"id": "5f0c9d4e-8a53-4b1a-9a64-2f3c1d7e9b10",
		"username": "grace",
		"email": "grace@example.com"
	});
	for (key, value) in extra.as_object().unwrap() {
		input[key] = value.clone();
	}

	// Act
	let result = schema(user_kinds).validate(&event, input).await;

	// Assert
	let data = result.data().unwrap();
	assert_eq!(data["isActive"], json!(true));
	for optional in ["permissions", "moderatedSections"] {
		assert_eq!(data.get(optional).is_some(), kept == Some(optional));
	}
}

#[rstest]
#[tokio::test]
async fn test_union_without_match_is_form_error(event: RequestEvent, user_kinds: UnionRule) {
	let result = schema(user_kinds)
		.validate(&event, json!({"id": "nope", "username": "ab"}))
		.await;

	let error = result.error().unwrap();
	assert_eq!(error.form_errors, vec!["Invalid input"]);
	assert!(error.field_errors.is_empty());
}
