//! Then steps for task descriptor BDD scenarios.

use super::world::DescriptorWorld;
use rstest_bdd_macros::then;

#[then(r#"the descriptor has uuid "{uuid}" and type "{task_type}""#)]
fn descriptor_has_identity(
    world: &DescriptorWorld,
    uuid: String,
    task_type: String,
) -> Result<(), eyre::Report> {
    let task = world.built()?;
    if task.uuid() != uuid || task.task_type() != task_type {
        return Err(eyre::eyre!("expected {task_type} task {uuid}, found {task}"));
    }
    Ok(())
}

#[then(r#"the submitter is "{submitter}""#)]
fn submitter_is(world: &DescriptorWorld, submitter: String) -> Result<(), eyre::Report> {
    let task = world.built()?;
    if task.submitter_uuid() != Some(submitter.as_str()) {
        return Err(eyre::eyre!(
            "expected submitter {submitter}, found {:?}",
            task.submitter_uuid()
        ));
    }
    Ok(())
}

#[then("the descriptor has no submitter")]
fn no_submitter(world: &DescriptorWorld) -> Result<(), eyre::Report> {
    let task = world.built()?;
    if let Some(submitter) = task.submitter_uuid() {
        return Err(eyre::eyre!("expected no submitter, found {submitter}"));
    }
    Ok(())
}

#[then(r#"the characteristics are "{expected}""#)]
fn characteristics_are(world: &DescriptorWorld, expected: String) -> Result<(), eyre::Report> {
    let task = world.built()?;
    let rendered = task
        .characteristics()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",");
    if rendered != expected {
        return Err(eyre::eyre!(
            "expected characteristics {expected}, found {rendered}"
        ));
    }
    Ok(())
}

#[then(r#"the build fails with "{message}""#)]
fn build_fails_with(world: &DescriptorWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_build_result.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected error '{message}', got '{err}'")),
        Some(Ok(task)) => Err(eyre::eyre!("expected failure, built {task}")),
        None => Err(eyre::eyre!("the descriptor has not been built")),
    }
}

#[then("both descriptors are equal")]
fn descriptors_are_equal(world: &DescriptorWorld) -> Result<(), eyre::Report> {
    let first = world.built()?;
    let second = match world.second_build_result.as_ref() {
        Some(Ok(task)) => task,
        other => return Err(eyre::eyre!("missing second descriptor: {other:?}")),
    };
    if first != second {
        return Err(eyre::eyre!("expected {first} to equal {second}"));
    }
    Ok(())
}
