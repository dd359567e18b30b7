use crate::Result;
use crate::provider::BucketProvider;
use crate::sdk;
use async_trait::async_trait;
use tracing::debug;

const SERVICE: &str = "s3";

pub struct S3BucketProvider {
    client: aws_sdk_s3::Client,
}

impl S3BucketProvider {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BucketProvider for S3BucketProvider {
    async fn empty_bucket(&self, bucket: &str) -> Result<usize> {
        let mut removed = 0;
        let mut continuation_token: Option<String> = None;

        loop {
            let response = self
                .client
                .list_objects_v2()
                .bucket(bucket)
                .set_continuation_token(continuation_token.take())
                .send()
                .await
                .map_err(|e| sdk::provider_error(SERVICE, e))?;

            for key in response.contents().iter().filter_map(|object| object.key()) {
                self.client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await
                    .map_err(|e| sdk::provider_error(SERVICE, e))?;

                debug!("Deleted s3://{}/{}", bucket, key);
                removed += 1;
            }

            match response.next_continuation_token() {
                Some(token) => continuation_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(removed)
    }
}
