//! One marker type per MediaPackage VOD operation.

use awsmarshal_client::protocol::{json, label, require};
use awsmarshal_client::{AwsJson, Operation};
use awsmarshal_core::{Envelope, MarshalError, RawResponse, UnmarshalError};
use http::Method;

use crate::error::MediaPackageVodError;
use crate::input::{
    CreatePackagingGroupInput, DeletePackagingGroupInput, DescribePackagingGroupInput,
    ListPackagingGroupsInput,
};
use crate::output::{
    CreatePackagingGroupOutput, DeletePackagingGroupOutput, DescribePackagingGroupOutput,
    ListPackagingGroupsOutput,
};

macro_rules! rest_operation {
    ($op:ident, $input:ty, $output:ty) => {
        #[doc = concat!("The `", stringify!($op), "` operation.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl Operation for $op {
            type Input = $input;
            type Output = $output;
            type Error = MediaPackageVodError;
            type Protocol = AwsJson;

            const NAME: &'static str = stringify!($op);

            fn marshall(input: &$input) -> Result<Envelope, MarshalError> {
                Self::envelope(input)
            }

            fn unmarshall(response: &RawResponse) -> Result<$output, UnmarshalError> {
                json::output(response)
            }
        }
    };
}

rest_operation!(CreatePackagingGroup, CreatePackagingGroupInput, CreatePackagingGroupOutput);
rest_operation!(DescribePackagingGroup, DescribePackagingGroupInput, DescribePackagingGroupOutput);
rest_operation!(ListPackagingGroups, ListPackagingGroupsInput, ListPackagingGroupsOutput);
rest_operation!(DeletePackagingGroup, DeletePackagingGroupInput, DeletePackagingGroupOutput);

impl CreatePackagingGroup {
    fn envelope(input: &CreatePackagingGroupInput) -> Result<Envelope, MarshalError> {
        require("CreatePackagingGroupInput", "id", input.id.as_ref())?;
        json::rest_envelope(Self::NAME, Method::POST, "/packaging_groups")
            .body(awsmarshal_json::to_body(input)?)
            .build()
    }
}

impl DescribePackagingGroup {
    fn envelope(input: &DescribePackagingGroupInput) -> Result<Envelope, MarshalError> {
        let id = label("DescribePackagingGroupInput", "id", input.id.as_deref())?;
        json::rest_envelope(Self::NAME, Method::GET, format!("/packaging_groups/{id}")).build()
    }
}

impl ListPackagingGroups {
    fn envelope(input: &ListPackagingGroupsInput) -> Result<Envelope, MarshalError> {
        let mut builder = json::rest_envelope(Self::NAME, Method::GET, "/packaging_groups");
        if let Some(max) = input.max_results {
            builder = builder.query_param("maxResults", max.to_string());
        }
        if let Some(token) = &input.next_token {
            builder = builder.query_param("nextToken", token);
        }
        builder.build()
    }
}

impl DeletePackagingGroup {
    fn envelope(input: &DeletePackagingGroupInput) -> Result<Envelope, MarshalError> {
        let id = label("DeletePackagingGroupInput", "id", input.id.as_deref())?;
        json::rest_envelope(Self::NAME, Method::DELETE, format!("/packaging_groups/{id}")).build()
    }
}
