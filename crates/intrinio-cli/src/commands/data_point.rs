use intrinio_core::{DataPointApi, Decimal, Identifier, Tag};
use serde::Serialize;

use crate::cli::DataPointArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct DataPointData<T> {
    identifier: Identifier,
    tag: Tag,
    value: T,
}

pub async fn number<A: DataPointApi>(
    args: &DataPointArgs,
    api: &A,
) -> Result<CommandResult, CliError> {
    let (identifier, tag) = parse_key(args)?;
    let value: Decimal = api.get_number(&identifier, &tag).await?;
    let data = serde_json::to_value(DataPointData {
        identifier,
        tag,
        value,
    })?;
    Ok(CommandResult::ok(data, 1))
}

pub async fn text<A: DataPointApi>(
    args: &DataPointArgs,
    api: &A,
) -> Result<CommandResult, CliError> {
    let (identifier, tag) = parse_key(args)?;
    let value = api.get_text(&identifier, &tag).await?;
    let data = serde_json::to_value(DataPointData {
        identifier,
        tag,
        value,
    })?;
    Ok(CommandResult::ok(data, 1))
}

fn parse_key(args: &DataPointArgs) -> Result<(Identifier, Tag), CliError> {
    Ok((Identifier::parse(&args.identifier)?, Tag::parse(&args.tag)?))
}
