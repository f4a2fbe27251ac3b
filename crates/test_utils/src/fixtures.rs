//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the expense
//! splitting system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use fake::faker::name::en::FirstName;
use fake::Fake;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{GroupId, MemberId, Money, Weight};
use domain_group::{Group, Member, MemberRole, NewGroup, NewMember};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical small shared purchase
    pub fn groceries() -> Money {
        Money::from_minor(3200)
    }

    /// A larger amount that splits unevenly three ways
    pub fn indivisible() -> Money {
        Money::from_minor(100)
    }

    /// A round restaurant bill
    pub fn dinner() -> Money {
        Money::from_minor(12000)
    }
}

/// Fixture for Weight test data
pub struct WeightFixtures;

impl WeightFixtures {
    pub fn adult() -> Weight {
        Weight::new(dec!(1))
    }

    pub fn student() -> Weight {
        Weight::new(dec!(0.8))
    }

    pub fn child() -> Weight {
        Weight::new(dec!(0.5))
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic group ID for testing
    pub fn group_id() -> GroupId {
        GroupId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic member ID for testing
    pub fn member_id() -> MemberId {
        MemberId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// A random first name for a member
    pub fn person_name() -> String {
        FirstName().fake()
    }

    /// A plausible group name
    pub fn group_name() -> &'static str {
        "Weekend trip"
    }

    /// A plausible expense title
    pub fn expense_title() -> &'static str {
        "Dinner"
    }
}

/// Fixture for fully-built group aggregates
pub struct GroupFixtures;

impl GroupFixtures {
    /// A group with no members yet
    pub fn empty_group() -> Group {
        Group::create(NewGroup {
            name: StringFixtures::group_name().to_string(),
        })
        .expect("fixture group is valid")
    }

    /// A group with `count` adult members of weight 1
    pub fn group_with_members(count: usize) -> (Group, Vec<Member>) {
        let group = Self::empty_group();
        let members = (0..count)
            .map(|i| {
                Member::create(
                    group.id,
                    NewMember {
                        name: format!("Member {i}"),
                        role: MemberRole::Adult,
                        default_weight: dec!(1),
                    },
                )
                .expect("fixture member is valid")
            })
            .collect();
        (group, members)
    }
}
