//! One marker type per Synthetics operation.

use awsmarshal_client::protocol::{json, label, require};
use awsmarshal_client::{AwsJson, Operation};
use awsmarshal_core::{Envelope, MarshalError, RawResponse, UnmarshalError};
use http::Method;

use crate::error::SyntheticsError;
use crate::input::{
    CreateCanaryInput, DeleteCanaryInput, DescribeCanariesInput, GetCanaryInput,
    StartCanaryInput, StopCanaryInput,
};
use crate::output::{
    CreateCanaryOutput, DeleteCanaryOutput, DescribeCanariesOutput, GetCanaryOutput,
    StartCanaryOutput, StopCanaryOutput,
};

macro_rules! rest_operation {
    ($op:ident, $input:ty, $output:ty) => {
        #[doc = concat!("The `", stringify!($op), "` operation.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl Operation for $op {
            type Input = $input;
            type Output = $output;
            type Error = SyntheticsError;
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

rest_operation!(CreateCanary, CreateCanaryInput, CreateCanaryOutput);
rest_operation!(GetCanary, GetCanaryInput, GetCanaryOutput);
rest_operation!(DescribeCanaries, DescribeCanariesInput, DescribeCanariesOutput);
rest_operation!(StartCanary, StartCanaryInput, StartCanaryOutput);
rest_operation!(StopCanary, StopCanaryInput, StopCanaryOutput);
rest_operation!(DeleteCanary, DeleteCanaryInput, DeleteCanaryOutput);

impl CreateCanary {
    fn envelope(input: &CreateCanaryInput) -> Result<Envelope, MarshalError> {
        const SHAPE: &str = "CreateCanaryInput";
        require(SHAPE, "Name", input.name.as_ref())?;
        require(SHAPE, "Code", input.code.as_ref())?;
        require(SHAPE, "ArtifactS3Location", input.artifact_s3_location.as_ref())?;
        require(SHAPE, "ExecutionRoleArn", input.execution_role_arn.as_ref())?;
        require(SHAPE, "Schedule", input.schedule.as_ref())?;
        require(SHAPE, "RuntimeVersion", input.runtime_version.as_ref())?;
        json::rest_envelope(Self::NAME, Method::POST, "/canary")
            .body(awsmarshal_json::to_body(input)?)
            .build()
    }
}

impl GetCanary {
    fn envelope(input: &GetCanaryInput) -> Result<Envelope, MarshalError> {
        let name = label("GetCanaryInput", "Name", input.name.as_deref())?;
        json::rest_envelope(Self::NAME, Method::GET, format!("/canary/{name}")).build()
    }
}

impl DescribeCanaries {
    fn envelope(input: &DescribeCanariesInput) -> Result<Envelope, MarshalError> {
        json::rest_envelope(Self::NAME, Method::POST, "/canaries")
            .body(awsmarshal_json::to_body(input)?)
            .build()
    }
}

impl StartCanary {
    fn envelope(input: &StartCanaryInput) -> Result<Envelope, MarshalError> {
        let name = label("StartCanaryInput", "Name", input.name.as_deref())?;
        json::rest_envelope(Self::NAME, Method::POST, format!("/canary/{name}/start")).build()
    }
}

impl StopCanary {
    fn envelope(input: &StopCanaryInput) -> Result<Envelope, MarshalError> {
        let name = label("StopCanaryInput", "Name", input.name.as_deref())?;
        json::rest_envelope(Self::NAME, Method::POST, format!("/canary/{name}/stop")).build()
    }
}

impl DeleteCanary {
    fn envelope(input: &DeleteCanaryInput) -> Result<Envelope, MarshalError> {
        let name = label("DeleteCanaryInput", "Name", input.name.as_deref())?;
        let mut builder = json::rest_envelope(Self::NAME, Method::DELETE, format!("/canary/{name}"));
        if let Some(delete_lambda) = input.delete_lambda {
            builder = builder.query_param("deleteLambda", delete_lambda.to_string());
        }
        builder.build()
    }
}
