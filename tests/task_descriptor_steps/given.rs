//! Given steps for task descriptor BDD scenarios.

use super::world::DescriptorWorld;
use ce_task::task::domain::ComponentRef;
use rstest_bdd_macros::given;

fn component(uuid: &str) -> ComponentRef {
    ComponentRef::new(uuid, format!("{uuid}_KEY"), format!("Component {uuid}"))
}

#[given("an empty task builder")]
fn empty_builder(world: &mut DescriptorWorld) {
    let _ = world;
}

#[given(
    r#"a task builder for organization "{organization}" with uuid "{uuid}" and type "{task_type}""#
)]
fn builder_with_required_fields(
    world: &mut DescriptorWorld,
    organization: String,
    uuid: String,
    task_type: String,
) {
    world
        .builder
        .set_organization_uuid(organization)
        .set_uuid(uuid)
        .set_type(task_type);
}

#[given(r#"the submitter "{submitter}""#)]
fn submitter(world: &mut DescriptorWorld, submitter: String) {
    world.builder.set_submitter_uuid(submitter);
}

#[given("an empty submitter")]
fn empty_submitter(world: &mut DescriptorWorld) {
    world.builder.set_submitter_uuid("");
}

#[given(r#"the component "{component_uuid}" with main component "{main_uuid}""#)]
fn paired_components(world: &mut DescriptorWorld, component_uuid: String, main_uuid: String) {
    world
        .builder
        .set_component(component(&component_uuid))
        .set_main_component(component(&main_uuid));
}

#[given(r#"only the component "{component_uuid}""#)]
fn component_only(world: &mut DescriptorWorld, component_uuid: String) {
    world.builder.set_component(component(&component_uuid));
}

#[given(r#"the characteristic "{key}" set to "{value}""#)]
fn characteristic(world: &mut DescriptorWorld, key: String, value: String) {
    world.characteristics.insert(key, value);
    world
        .builder
        .set_characteristics(world.characteristics.clone());
}
