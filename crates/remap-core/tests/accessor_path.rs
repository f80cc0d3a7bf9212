use remap_core::accessor::{
    FieldGetter, Getter, MethodGetter, MethodSetter, NestedGetter, Read, ResolverGetter, Setter,
    SourcePath,
};
use remap_core::Value;
use std::sync::Arc;
use std_util::prelude::*;

#[derive(Default)]
struct Team {
    name: String,
}

#[derive(Default)]
struct Player {
    nickname: String,
    score: u32,
    team: Option<Team>,
}

impl Player {
    fn rank(&self) -> String {
        if self.score > 100 {
            "pro".to_string()
        } else {
            "rookie".to_string()
        }
    }

    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

fn team_name_path() -> SourcePath {
    SourcePath::new(
        "team.name",
        vec![
            Arc::new(NestedGetter::new(|p: &Player| p.team.as_ref())) as Arc<dyn Getter>,
            Arc::new(FieldGetter::new(|t: &Team| &t.name)),
        ],
    )
}

#[test]
fn path_reads_through_nested_object() {
    let player = Player {
        team: Some(Team {
            name: "Falcons".to_string(),
        }),
        ..Player::default()
    };

    assert_eq!(
        assert_ok!(team_name_path().read(&player)),
        Value::from("Falcons")
    );
}

#[test]
fn missing_nested_object_reads_as_null() {
    let player = Player::default();
    assert_eq!(assert_ok!(team_name_path().read(&player)), Value::Null);
}

#[test]
fn path_ending_at_an_object_fails() {
    let path = SourcePath::single(
        "team",
        Arc::new(NestedGetter::new(|p: &Player| p.team.as_ref())),
    );
    let player = Player {
        team: Some(Team::default()),
        ..Player::default()
    };

    let err = assert_err!(path.read(&player));
    assert!(err.to_string().contains("ends at a"));
}

#[test]
fn path_through_a_value_fails() {
    let path = SourcePath::new(
        "nickname.length",
        vec![
            Arc::new(FieldGetter::new(|p: &Player| &p.nickname)) as Arc<dyn Getter>,
            Arc::new(FieldGetter::new(|t: &Team| &t.name)),
        ],
    );

    let err = assert_err!(path.read(&Player::default()));
    assert_eq!(
        err.to_string(),
        "member path `nickname.length` passes through a String value"
    );
}

#[test]
fn empty_path_fails() {
    let path = SourcePath::new("", vec![]);
    assert!(path.is_empty());
    assert_err!(path.read(&Player::default()));
}

#[test]
fn getter_rejects_foreign_objects() {
    let getter = FieldGetter::new(|p: &Player| &p.score);

    let err = match getter.get(&Team::default()) {
        Ok(_) => panic!("expected an accessor target error"),
        Err(err) => err,
    };
    assert!(err.is_accessor_target());
    assert!(!err.is_validation());
    assert_eq!(err.type_mismatch_side(), None);
}

#[test]
fn method_accessors() {
    let getter = MethodGetter::new(Player::rank);
    let setter = MethodSetter::new(Player::set_score);

    let mut player = Player::default();
    assert_ok!(setter.set(&mut player, Value::U8(150)));
    assert_eq!(player.score, 150);

    let read = assert_ok!(getter.get(&player).map(Read::into_value));
    assert_eq!(read, Some(Value::from("pro")));

    let err = assert_err!(setter.set(&mut Team::default(), Value::U32(1)));
    assert!(err.is_accessor_target());
    assert!(!err.is_validation());
}

#[test]
fn resolver_sees_the_whole_source() {
    let resolver = ResolverGetter::new(|p: &Player| {
        Ok(format!("{} ({})", p.nickname, p.score))
    });
    let path = SourcePath::single("display()", Arc::new(resolver));

    let player = Player {
        nickname: "ace".to_string(),
        score: 7,
        team: None,
    };
    assert_eq!(assert_ok!(path.read(&player)), Value::from("ace (7)"));
}
