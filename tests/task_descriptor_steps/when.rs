//! When steps for task descriptor BDD scenarios.

use super::world::DescriptorWorld;
use rstest_bdd_macros::when;

#[when("the descriptor is built")]
fn build_descriptor(world: &mut DescriptorWorld) {
    world.last_build_result = Some(world.builder.build());
}

#[when("the descriptor is built twice")]
fn build_descriptor_twice(world: &mut DescriptorWorld) {
    world.last_build_result = Some(world.builder.build());
    world.second_build_result = Some(world.builder.build());
}
